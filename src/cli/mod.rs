pub mod commands;
pub mod handlers;
use crate::error::Error;

// Re-export commonly used items
pub use commands::GenerateArgs;
pub use handlers::handle_generate_command;

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_NAME: &str = "slsa-provenance";

pub fn format_error(error: &Error) -> String {
    match error {
        Error::Io(err) => format!("IO error: {err}"),
        Error::NotFound(path) => format!("resource path not found: [provided={path}]"),
        Error::MissingInput(flag) => format!("no value found for required flag: {flag}"),
        Error::MalformedContext(document, err) => format!("failed to parse {document}: {err}"),
        Error::Serialization(msg) => format!("serialization error: {msg}"),
        Error::InitializationError(msg) => format!("initialization error: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_not_found() {
        let msg = format_error(&Error::NotFound("artifacts/".to_string()));
        assert_eq!(msg, "resource path not found: [provided=artifacts/]");
    }

    #[test]
    fn test_format_error_missing_input() {
        let msg = format_error(&Error::MissingInput("artifact-path".to_string()));
        assert_eq!(msg, "no value found for required flag: artifact-path");
    }

    #[test]
    fn test_cli_constants_match_package() {
        assert_eq!(CLI_NAME, env!("CARGO_PKG_NAME"));
        assert_eq!(CLI_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
