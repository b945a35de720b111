//! PDF backend
//!
//! Text is pulled from each page's content stream and pages are joined
//! with `\n`. A page without a text layer contributes an empty line. When
//! the whole document has no text (a scanned contract), an optional
//! fallback source such as an OCR engine is asked instead.

use crate::error::ExtractError;
use crate::limits::{read_document, DEFAULT_MAX_BYTES};
use crate::registry::Backend;
use contractguard_domain::traits::TextSource;
use lopdf::Document;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `.pdf` documents
pub struct PdfExtractor {
    max_bytes: u64,
    fallback: Option<Backend>,
}

impl PdfExtractor {
    /// Create an extractor with the default size limit and no fallback
    pub fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            fallback: None,
        }
    }

    /// Change the size limit
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Source asked when the PDF has no text layer
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: TextSource<Error = ExtractError> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PdfExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfExtractor")
            .field("max_bytes", &self.max_bytes)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl TextSource for PdfExtractor {
    type Error = ExtractError;

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = read_document(path, self.max_bytes)?;
        let document = Document::load_mem(&bytes)
            .map_err(|e| ExtractError::Backend(format!("Unreadable PDF: {}", e)))?;

        let text = page_text(&document);
        if !text.trim().is_empty() {
            return Ok(text);
        }

        match &self.fallback {
            Some(fallback) => {
                info!("No text layer in {}, using fallback source", path.display());
                fallback.extract(path)
            }
            None => {
                warn!("No text layer in {}", path.display());
                Ok(text)
            }
        }
    }
}

fn page_text(document: &Document) -> String {
    let pages: Vec<String> = document
        .get_pages()
        .into_keys()
        .map(|number| match document.extract_text(&[number]) {
            Ok(text) => text,
            Err(e) => {
                debug!("No text on page {}: {}", number, e);
                String::new()
            }
        })
        .collect();
    pages.join("\n")
}
