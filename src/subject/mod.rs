//! # Subject Resolution
//!
//! A [`Subject`] names the artifact being attested and carries one or more
//! content digests. Subjects are resolved in exactly one of two ways:
//!
//! - from a **file path**, in which case the file is hashed with the default
//!   algorithm ([`crate::hash::DIGEST_ALGORITHM`]) and the name defaults to
//!   the file's base name;
//! - from an explicit **digest string** of the form `sha256:<hex-digest>`,
//!   in which case a subject name must be supplied by the caller.
//!
//! [`subject_from_inputs`] enforces that the two are mutually exclusive and
//! that at least one is present.

use crate::error::{Error, Result};
use crate::hash::{self, DIGEST_ALGORITHM, SHA256_HEX_LENGTH};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The artifact being attested: a name plus content digests keyed by
/// algorithm identifier (e.g. `sha256` -> 64 hex characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
    pub digest: BTreeMap<String, String>,
}

impl Subject {
    /// Build a subject with a single digest entry.
    pub fn new(name: impl Into<String>, algorithm: &str, digest: impl Into<String>) -> Self {
        Subject {
            name: name.into(),
            digest: BTreeMap::from([(algorithm.to_string(), digest.into())]),
        }
    }
}

/// Resolve a subject from the caller-supplied inputs, enforcing that a
/// subject path and a subject digest are mutually exclusive and that at
/// least one of the two is present.
///
/// # Errors
///
/// - [`Error::Configuration`] if both or neither of `path` and `digest` are
///   supplied, or if `digest` is supplied without a `name`.
/// - Any error from [`subject_from_path`] / [`subject_from_digest`].
pub fn subject_from_inputs(
    path: Option<&Path>,
    digest: Option<&str>,
    name: Option<&str>,
) -> Result<Subject> {
    if path.is_some() && digest.is_some() {
        return Err(Error::Configuration(
            "Only one of subject-path or subject-digest may be provided".to_string(),
        ));
    }

    match path {
        Some(path) => subject_from_path(path, name),
        None => {
            let digest = digest.ok_or_else(|| {
                Error::Configuration(
                    "One of subject-path or subject-digest must be provided".to_string(),
                )
            })?;
            let name = name.ok_or_else(|| {
                Error::Configuration(
                    "subject-name must be provided when using subject-digest".to_string(),
                )
            })?;

            subject_from_digest(digest, name)
        }
    }
}

/// Resolve a subject by hashing the file at `path`.
///
/// The subject name defaults to the final path segment (including any
/// extension) unless `name_override` is given.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` does not exist.
/// - [`Error::Io`] if the file cannot be read while hashing.
pub fn subject_from_path(path: &Path, name_override: Option<&str>) -> Result<Subject> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Could not find subject at path {}",
            path.display()
        )));
    }

    let name = match name_override {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .map(|base| base.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned()),
    };
    let digest = hash::calculate_file_hash(path)?;

    Ok(Subject::new(name, DIGEST_ALGORITHM, digest))
}

/// Resolve a subject from an explicit `sha256:<hex-digest>` string.
///
/// The digest payload must be exactly 64 hexadecimal characters; it is
/// carried into the subject verbatim.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the string does not match the expected
/// shape.
///
/// # Examples
///
/// ```
/// use provenance_cli::subject::subject_from_digest;
///
/// let digest = format!("sha256:{}", "a".repeat(64));
/// let subject = subject_from_digest(&digest, "my-package-1.0.0.tgz").unwrap();
/// assert_eq!(subject.name, "my-package-1.0.0.tgz");
/// assert_eq!(subject.digest["sha256"], "a".repeat(64));
/// ```
pub fn subject_from_digest(digest: &str, name: &str) -> Result<Subject> {
    // Expected shape: sha256:<64 hex characters>
    let hex_digest = digest
        .strip_prefix("sha256:")
        .filter(|payload| {
            payload.len() == SHA256_HEX_LENGTH
                && payload.chars().all(|c| c.is_ascii_hexdigit())
        })
        .ok_or_else(|| {
            Error::Validation(
                "subject-digest must be in the format \"sha256:<hex-digest>\"".to_string(),
            )
        })?;

    Ok(Subject::new(name, DIGEST_ALGORITHM, hex_digest))
}
