//! Error handling for the CLI application

use thiserror::Error;

/// Conditions the CLI reports on its own, as opposed to core failures
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Processing error from core
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("1910e-grine-felder.psd".to_string());
        assert_eq!(error.to_string(), "File not found: 1910e-grine-felder.psd");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown catalogue".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown catalogue");
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("no split rule for P~D".to_string());
        assert_eq!(error.to_string(), "Processing error: no split rule for P~D");
    }

    #[test]
    fn test_error_keeps_script_text() {
        let error = CliError::ProcessingError("אױפֿן".to_string());
        assert_eq!(error.to_string(), "Processing error: אױפֿן");
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Configuration error: bad");
    }
}
