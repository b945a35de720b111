//! Trait definitions for the seams between crates
//!
//! Implementations live in other crates.

use crate::{Classification, Clause};
use std::path::Path;

/// Trait for assigning a risk tier to a clause
///
/// Implemented by the analyzer layer (contractguard-analyzer)
pub trait ClauseClassifier {
    /// Classify one clause
    ///
    /// Classification cannot fail; a clause nothing matches is unflagged.
    fn classify(&self, clause: &Clause) -> Classification;
}

/// Trait for turning a document on disk into plain text
///
/// Implemented by the extraction layer (contractguard-extractor)
pub trait TextSource {
    /// Error type for extraction
    type Error;

    /// Read the document at `path` and return its text
    fn extract(&self, path: &Path) -> Result<String, Self::Error>;
}
