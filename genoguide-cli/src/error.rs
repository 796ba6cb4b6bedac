//! Error handling for the genoguide CLI

use genoguide_core::SourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for genoguide CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("No {what} named '{name}'")]
    NotFound {
        what: String,
        name: String,
        available: Vec<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Output error: {message}")]
    Output { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat { message: message.into() }
    }

    pub fn not_found<S: Into<String>>(what: S, name: S) -> Self {
        Self::NotFound {
            what: what.into(),
            name: name.into(),
            available: Vec::new(),
        }
    }

    /// Attach the names that do exist, shown as suggestions.
    pub fn with_available<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::NotFound { available, .. } = &mut self {
            available.extend(names.into_iter().map(Into::into));
        }
        self
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::output(format!("JSON serialization error: {}", err))
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        let message = err.to_string();
        match err {
            SourceError::MissingFile(path) => Self::file_not_found(path),
            SourceError::Io { .. } => Self::io(message),
            SourceError::Decode { .. } => Self::invalid_format(message),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the path is correct: {}\n\
                 • Point --data at a snapshot directory containing chromosomes.json\n\
                 • Snapshot files may also be gzip-compressed as .json.gz",
                path.display()
            ));
        }

        CliError::InvalidFormat { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check that the snapshot files hold JSON arrays as returned by the genome data service\n\
                 • Ensure the file is not corrupted or truncated",
            );
        }

        CliError::NotFound { available, .. } if !available.is_empty() => {
            message.push_str("\n\nAvailable:");
            for name in available {
                message.push_str(&format!("\n • {}", name));
            }
        }

        CliError::NotFound { what, .. } if what == "gene" => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Gene symbols are matched exactly and case-sensitively\n\
                 • Use 'genoguide search <PREFIX>' to find the exact symbol",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your genoguide.toml configuration file\n\
                 • Use 'genoguide config --example' to generate a sample configuration\n\
                 • Verify that all configuration values are valid",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CliError::config("test message");
        assert!(matches!(err, CliError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = CliError::not_found("gene", "BRCA3");
        assert_eq!(err.to_string(), "No gene named 'BRCA3'");
    }

    #[test]
    fn test_error_suggestions() {
        let err = CliError::file_not_found(PathBuf::from("data/chromosomes.json"));
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Suggestions:"));
        assert!(formatted.contains("Check that the path is correct"));

        let err = CliError::not_found("gene", "brca1");
        assert!(format_error_with_suggestions(&err).contains("genoguide search"));
    }

    #[test]
    fn test_available_names_listed() {
        let err = CliError::not_found("statistic", "gc")
            .with_available(["mitochondrial_base_composition", "nuclear_base_composition"]);
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Available:"));
        assert!(formatted.contains("• nuclear_base_composition"));

        // only NotFound carries names
        let err = CliError::validation("bad").with_available(["x"]);
        assert!(!format_error_with_suggestions(&err).contains("Available:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io { .. }));
    }

    #[test]
    fn test_source_error_conversion() {
        let err: CliError = SourceError::MissingFile(PathBuf::from("snap/chromosomes.json")).into();
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }
}
