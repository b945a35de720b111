//! Document kinds recognised by extension

use crate::error::ExtractError;
use std::fmt;
use std::path::Path;

/// Kind of document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `.pdf`
    Pdf,
    /// `.docx`
    Docx,
    /// `.txt`
    Txt,
}

impl DocumentKind {
    /// Every supported kind
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::Txt];

    /// Lowercase extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }

    /// Parse an extension (with or without the leading dot), ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// Detect the kind of the file at `path`
    pub fn detect(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&ext).ok_or_else(|| {
            if ext.is_empty() {
                ExtractError::UnsupportedExtension("(none)".to_string())
            } else {
                ExtractError::UnsupportedExtension(format!(".{}", ext.to_lowercase()))
            }
        })
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(DocumentKind::detect(Path::new("a/b/Contract.TXT")).unwrap(), DocumentKind::Txt);
        assert_eq!(DocumentKind::detect(Path::new("nda.Pdf")).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(Path::new("lease.docx")).unwrap(), DocumentKind::Docx);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DocumentKind::detect(Path::new("memo.RTF")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: .rtf");
    }

    #[test]
    fn test_missing_extension() {
        let err = DocumentKind::detect(Path::new("README")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedExtension(ref e) if e == "(none)"));
    }

    #[test]
    fn test_from_extension_with_dot() {
        assert_eq!(DocumentKind::from_extension(".txt"), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_extension("doc"), None);
    }
}
