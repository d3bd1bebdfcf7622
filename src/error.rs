//! Error types for the slsa-provenance CLI.
//!
//! All fallible operations return [`Result`], wrapping the crate-wide
//! [`Error`] enum. Errors are terminal for an invocation: there is no retry
//! and no partial output; the CLI layer formats the error and exits nonzero.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All error conditions the provenance generator can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying read or write failure during scanning or output writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact path does not resolve to an existing filesystem entry.
    #[error("resource path not found: [provided={0}]")]
    NotFound(String),

    /// A required CLI parameter is absent or empty.
    #[error("no value found for required flag: {0}")]
    MissingInput(String),

    /// A context document did not parse as the expected structure.
    #[error("failed to parse {0}: {1}")]
    MalformedContext(&'static str, #[source] serde_json::Error),

    /// The assembled statement could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Logger or other startup initialization failed.
    #[error("initialization error: {0}")]
    InitializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_original_path() {
        let err = Error::NotFound("missing/artifact".to_string());
        assert_eq!(
            err.to_string(),
            "resource path not found: [provided=missing/artifact]"
        );
    }

    #[test]
    fn test_missing_input_names_flag() {
        let err = Error::MissingInput("github-context".to_string());
        assert!(err.to_string().contains("github-context"));
    }

    #[test]
    fn test_malformed_context_names_document() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::MalformedContext("runner context", json_err);
        assert!(err.to_string().starts_with("failed to parse runner context"));
    }
}
