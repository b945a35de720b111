//! Plain-text backend

use crate::error::ExtractError;
use crate::limits::{read_document, DEFAULT_MAX_BYTES};
use contractguard_domain::traits::TextSource;
use std::path::Path;

/// Reads `.txt` documents
///
/// Bytes that are not valid UTF-8 are dropped rather than rejected, and a
/// leading byte-order mark is removed.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    max_bytes: u64,
}

impl PlainTextExtractor {
    /// Create an extractor with the default size limit
    pub fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Change the size limit
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for PlainTextExtractor {
    type Error = ExtractError;

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = read_document(path, self.max_bytes)?;
        Ok(decode_ignoring_errors(&bytes))
    }
}

/// Decode UTF-8, silently dropping invalid sequences and a leading BOM
pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode_ignoring_errors("Fee: 100 €.".as_bytes()), "Fee: 100 €.");
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let bytes = b"Late \xff\xfefee applies.";
        assert_eq!(decode_ignoring_errors(bytes), "Late fee applies.");
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xef\xbb\xbfTerm of agreement.";
        assert_eq!(decode_ignoring_errors(bytes), "Term of agreement.");
    }

    #[test]
    fn test_extract_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Governing law shall be Delaware.").unwrap();

        let text = PlainTextExtractor::new().extract(file.path()).unwrap();
        assert_eq!(text, "Governing law shall be Delaware.");
    }

    #[test]
    fn test_size_limit() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[b'a'; 64]).unwrap();

        let result = PlainTextExtractor::new().with_max_bytes(16).extract(file.path());
        assert!(matches!(result, Err(ExtractError::TooLarge { size: 64, limit: 16 })));
    }

    #[test]
    fn test_missing_file() {
        let result = PlainTextExtractor::new().extract(Path::new("/nonexistent/contract.txt"));
        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }
}
