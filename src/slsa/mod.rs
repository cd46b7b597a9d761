//! # SLSA Build Provenance Generation
//!
//! Maps the facts a CI vendor exposes through its environment into the SLSA
//! provenance predicate that vendor targets, wrapped in the matching in-toto
//! statement envelope:
//!
//! - **GitHub Actions** -> in-toto Statement v1 with SLSA predicate v1
//! - **GitLab CI** -> in-toto Statement v0.1 with SLSA predicate v0.2
//!
//! Each vendor variant is a pure function of `(Subject, Environment)`:
//! deterministic, no I/O, no hidden state. Any other execution environment
//! is a hard error; no partial or degraded statement is ever produced.
//!
//! ## Examples
//!
//! ```
//! use provenance_cli::ci::Environment;
//! use provenance_cli::slsa::{SLSA_PREDICATE_V1_TYPE, generate_provenance};
//! use provenance_cli::subject::Subject;
//!
//! let env: Environment = [
//!     ("GITHUB_ACTIONS", "true"),
//!     ("GITHUB_SERVER_URL", "https://github.com"),
//!     ("GITHUB_REPOSITORY", "octo/widget"),
//!     ("GITHUB_SHA", "deadbeef"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let subject = Subject::new("widget-1.0.0.tgz", "sha256", "a".repeat(64));
//! let provenance = generate_provenance(subject, &env).unwrap();
//! assert_eq!(provenance.predicate_type(), SLSA_PREDICATE_V1_TYPE);
//! ```

use crate::ci::{Environment, Vendor};
use crate::error::{Error, Result};
use crate::in_toto::Statement;
use crate::subject::Subject;
use serde::Serialize;

pub mod github;
pub mod gitlab;

/// SLSA v0.2 provenance predicate type URI.
pub const SLSA_PREDICATE_V02_TYPE: &str = "https://slsa.dev/provenance/v0.2";

/// SLSA v1 provenance predicate type URI.
pub const SLSA_PREDICATE_V1_TYPE: &str = "https://slsa.dev/provenance/v1";

/// The identity of the system that executed the build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Builder {
    pub id: String,
}

/// A complete provenance statement, one variant per supported CI vendor.
///
/// The vendor set is closed, so the per-vendor schema difference is modeled
/// as a tagged union rather than open-ended dispatch. Serialization is
/// untagged: each variant already carries its schema URIs in the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Provenance {
    GitHubActions(Statement<github::GitHubPredicate>),
    GitLab(Statement<gitlab::GitLabPredicate>),
}

impl Provenance {
    /// The predicate type URI of the generated statement.
    pub fn predicate_type(&self) -> &'static str {
        match self {
            Provenance::GitHubActions(statement) => statement.predicate_type,
            Provenance::GitLab(statement) => statement.predicate_type,
        }
    }

    /// The statement envelope type URI.
    pub fn statement_type(&self) -> &'static str {
        match self {
            Provenance::GitHubActions(statement) => statement.statement_type,
            Provenance::GitLab(statement) => statement.statement_type,
        }
    }
}

/// Generate a provenance statement for `subject` from the ambient CI
/// environment.
///
/// Detection selects exactly one vendor variant for the remainder of the
/// call; the variant's builder then maps environment facts into its
/// predicate schema.
///
/// # Errors
///
/// Returns [`Error::UnsupportedEnvironment`] when the environment matches
/// neither GitHub Actions nor GitLab CI.
pub fn generate_provenance(subject: Subject, env: &Environment) -> Result<Provenance> {
    match Vendor::detect(env) {
        Vendor::GitHubActions => Ok(Provenance::GitHubActions(github::build_statement(
            subject, env,
        ))),
        Vendor::GitLab => Ok(Provenance::GitLab(gitlab::build_statement(subject, env))),
        Vendor::Unknown => Err(Error::UnsupportedEnvironment(
            "Unsupported CI system: only GitHub Actions and GitLab CI are supported".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Subject {
        Subject::new("pkg-1.0.0.tgz", "sha256", "c".repeat(64))
    }

    #[test]
    fn test_generate_provenance_unknown_environment_fails() {
        let env = Environment::default();
        let result = generate_provenance(subject(), &env);

        assert!(matches!(result, Err(Error::UnsupportedEnvironment(_))));
    }

    #[test]
    fn test_generate_provenance_selects_github_schema() {
        let env: Environment = [("GITHUB_ACTIONS", "true")].into_iter().collect();
        let provenance = generate_provenance(subject(), &env).unwrap();

        assert_eq!(provenance.predicate_type(), SLSA_PREDICATE_V1_TYPE);
        assert_eq!(
            provenance.statement_type(),
            crate::in_toto::INTOTO_STATEMENT_V1_TYPE
        );
    }

    #[test]
    fn test_generate_provenance_selects_gitlab_schema() {
        let env: Environment = [("GITLAB_CI", "true")].into_iter().collect();
        let provenance = generate_provenance(subject(), &env).unwrap();

        assert_eq!(provenance.predicate_type(), SLSA_PREDICATE_V02_TYPE);
        assert_eq!(
            provenance.statement_type(),
            crate::in_toto::INTOTO_STATEMENT_V01_TYPE
        );
    }

    #[test]
    fn test_predicate_type_uris() {
        assert_eq!(SLSA_PREDICATE_V02_TYPE, "https://slsa.dev/provenance/v0.2");
        assert_eq!(SLSA_PREDICATE_V1_TYPE, "https://slsa.dev/provenance/v1");
    }
}
