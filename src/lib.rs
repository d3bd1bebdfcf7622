//! # slsa-provenance
//!
//! Generate SLSA build provenance attestations for artifacts built on
//! GitHub Actions.
//!
//! Run at the end of a CI build, the CLI hashes the produced artifacts,
//! combines the digests with the workflow's build context, and writes a
//! signed-ready in-toto Statement (v0.1) carrying the SLSA v0.1 provenance
//! predicate.
//!
//! ## Quick Start
//!
//! ```bash
//! slsa-provenance generate \
//!     --artifact-path target/release/myapp \
//!     --output-path build.provenance \
//!     --github-context "$GITHUB_CONTEXT" \
//!     --runner-context "$RUNNER_CONTEXT"
//! ```
//!
//! Inside a workflow, pass `${{ toJSON(github) }}` and `${{ toJSON(runner) }}`
//! as the context values.

#![doc(html_root_url = "https://docs.rs/slsa-provenance/0.1.0")]

pub mod cli;
pub mod error;
pub mod github;
pub mod hash;
pub mod intoto;
pub mod slsa;
#[cfg(test)]
mod tests;

// Re-export error types
pub use error::{Error, Result};

/// Initialize logging for the CLI
///
/// # Examples
///
/// ```
/// use slsa_provenance::init_logging;
///
/// // Initialize with default settings
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}
