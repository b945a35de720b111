//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analyzer setup error (lexicon or analyzer settings)
    #[error(transparent)]
    Analyzer(#[from] contractguard_analyzer::AnalyzerError),

    /// Text extraction error
    #[error("Failed to extract text: {0}")]
    Extract(#[from] contractguard_extractor::ExtractError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Line editor error
    #[error("Readline error: {0}")]
    Readline(String),

    /// Some documents could not be extracted
    #[error("{0} document(s) could not be analyzed")]
    ExtractionFailed(usize),
}
