//! Error types for the provenance CLI.
//!
//! Every failure in statement generation is terminal for the current
//! invocation: there is no retry or partial output. Each variant carries a
//! human-readable message naming the precondition that failed.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Mutually-exclusive or missing subject inputs.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed input, e.g. a digest string that is not `sha256:<hex>`.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The subject path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Read failure while hashing the subject file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Statement serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The ambient environment matches no supported CI vendor.
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// Logger setup failure.
    #[error("Initialization error: {0}")]
    Initialization(String),
}
