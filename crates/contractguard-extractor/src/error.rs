//! Error types for text extraction

use crate::kind::DocumentKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not a supported document kind
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    /// No backend registered for a supported kind
    #[error("No extraction backend available for {0} documents")]
    NoBackend(DocumentKind),

    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document exceeds the size limit
    #[error("Document too large: {size} bytes (max: {limit})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// A backend failed to parse the document
    #[error("Extraction backend error: {0}")]
    Backend(String),
}
