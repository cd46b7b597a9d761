//! # provenance-cli
//!
//! Generate SLSA build provenance statements on supported cloud CI/CD
//! vendors.
//!
//! The tool reads the facts a CI vendor exposes through the process
//! environment and produces an unsigned in-toto statement describing how the
//! build artifact (the "subject") was produced. Two vendors are supported,
//! each mapped to the SLSA predicate schema it targets:
//!
//! - **GitHub Actions** -> in-toto Statement v1, SLSA provenance v1
//! - **GitLab CI** -> in-toto Statement v0.1, SLSA provenance v0.2
//!
//! Signing the statement, uploading it to a transparency log, and verifying
//! it are out of scope; the output of this tool is the well-formed,
//! schema-correct statement itself.
//!
//! ## Quick Start
//!
//! Generate provenance for a built artifact inside a CI job:
//! ```bash
//! provenance-cli generate dist/my-package-1.0.0.tgz
//! ```
//!
//! Or attest a digest computed elsewhere:
//! ```bash
//! provenance-cli generate \
//!     --subject-name=my-package-1.0.0.tgz \
//!     --subject-digest=sha256:0f2a... \
//!     --output-file=provenance.json
//! ```

pub mod ci;
pub mod cli;
pub mod error;
pub mod hash;
pub mod in_toto;
pub mod slsa;
pub mod subject;
#[cfg(test)]
mod tests;

// Re-export error types
pub use error::{Error, Result};

/// Initialize logging for the CLI
///
/// # Examples
///
/// ```
/// use provenance_cli::init_logging;
///
/// // Initialize with default settings
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::Initialization(e.to_string()))
}
