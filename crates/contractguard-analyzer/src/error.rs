//! Error types for the Analyzer

use contractguard_domain::LexiconError;
use thiserror::Error;

/// Errors raised while configuring the analyzer
///
/// Analysis itself cannot fail; these cover loading lexicons and settings.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Lexicon failed validation
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Failed to read a lexicon or config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
