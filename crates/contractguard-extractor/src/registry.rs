//! Backend registry keyed by document kind

use crate::docx::DocxExtractor;
use crate::error::ExtractError;
use crate::kind::DocumentKind;
use crate::pdf::PdfExtractor;
use crate::plain_text::PlainTextExtractor;
use contractguard_domain::traits::TextSource;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

pub(crate) type Backend = Box<dyn TextSource<Error = ExtractError> + Send + Sync>;

/// Text extracted from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Extracted text, possibly empty
    pub text: String,

    /// Kind the document was detected as
    pub kind: DocumentKind,
}

impl ExtractedText {
    /// Whether the document yielded no usable text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Maps document kinds to extraction backends
pub struct ExtractorRegistry {
    backends: HashMap<DocumentKind, Backend>,
}

impl ExtractorRegistry {
    /// Create a registry with no backends
    pub fn empty() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Create a registry with the built-in PDF, DOCX and plain-text backends
    ///
    /// The PDF backend has no fallback for scanned documents; register a
    /// [`PdfExtractor::with_fallback`] to add one.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(DocumentKind::Pdf, PdfExtractor::new());
        registry.register(DocumentKind::Docx, DocxExtractor::new());
        registry.register(DocumentKind::Txt, PlainTextExtractor::new());
        registry
    }

    /// Register (or replace) the backend for `kind`
    pub fn register<B>(&mut self, kind: DocumentKind, backend: B)
    where
        B: TextSource<Error = ExtractError> + Send + Sync + 'static,
    {
        self.backends.insert(kind, Box::new(backend));
    }

    /// Whether `kind` has a backend
    pub fn supports(&self, kind: DocumentKind) -> bool {
        self.backends.contains_key(&kind)
    }

    /// Kinds with a registered backend, in `DocumentKind::ALL` order
    pub fn supported_kinds(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }

    /// Extract text from the document at `path`
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedText, ExtractError> {
        let path = path.as_ref();
        let kind = DocumentKind::detect(path)?;

        let backend = self.backends.get(&kind).ok_or_else(|| {
            warn!("No backend registered for {} ({})", kind, path.display());
            ExtractError::NoBackend(kind)
        })?;

        let text = backend.extract(path)?;
        info!(
            "Extracted {} chars from {} ({})",
            text.len(),
            path.display(),
            kind
        );

        Ok(ExtractedText { text, kind })
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
