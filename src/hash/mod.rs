//! # Hash Module
//!
//! Cryptographic digest support for subject resolution. Provenance subjects
//! are currently identified by SHA-256 content digests, encoded as lowercase
//! hexadecimal.
//!
//! Files are hashed by streaming, so arbitrarily large artifacts can be
//! digested with bounded memory use.
//!
//! ## Examples
//!
//! ### Hashing in-memory data
//! ```
//! use provenance_cli::hash::calculate_hash;
//!
//! let data = b"Hello, World!";
//! let hash = calculate_hash(data);
//! assert_eq!(hash.len(), 64); // SHA-256 produces 64 hex characters
//! ```
//!
//! ### Hashing a file
//! ```no_run
//! use provenance_cli::hash::calculate_file_hash;
//! use std::path::Path;
//!
//! let path = Path::new("artifact.tgz");
//! let hash = calculate_file_hash(path).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The digest algorithm used for subjects resolved from a file path.
pub const DIGEST_ALGORITHM: &str = "sha256";

/// Hex string length of a SHA-256 digest.
pub const SHA256_HEX_LENGTH: usize = 64;

/// Calculate the SHA-256 hash of the given data.
///
/// Returns the lowercase hexadecimal encoding of the digest (64 characters).
///
/// # Examples
///
/// ```
/// use provenance_cli::hash::calculate_hash;
///
/// let hash = calculate_hash(b"test data");
/// assert_eq!(hash.len(), 64);
///
/// // Same data produces the same hash
/// assert_eq!(hash, calculate_hash(b"test data"));
///
/// // Different data produces a different hash
/// assert_ne!(hash, calculate_hash(b"other data"));
/// ```
pub fn calculate_hash(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Calculate the SHA-256 hash of a file.
///
/// The file is read in chunks and streamed into the hasher, so memory use is
/// bounded regardless of file size.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be opened or a read
/// fails mid-stream.
///
/// # Examples
///
/// ```no_run
/// use provenance_cli::hash::calculate_file_hash;
/// use std::path::Path;
///
/// let hash = calculate_file_hash(Path::new("dist/package.tgz")).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn calculate_file_hash(path: impl AsRef<Path>) -> Result<String> {
    let file = File::open(path.as_ref())?;
    hash_reader::<Sha256, _>(file)
}

/// Internal helper to hash data from a reader using streaming.
fn hash_reader<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
