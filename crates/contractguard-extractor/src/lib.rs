//! ContractGuard Extractor
//!
//! Turns contract documents on disk into plain text for the analyzer.
//!
//! # Overview
//!
//! The document kind is chosen by file extension. Each kind is served by a
//! backend implementing [`TextSource`]; the default registry ships
//! [`PdfExtractor`], [`DocxExtractor`] and [`PlainTextExtractor`]. OCR for
//! scanned PDFs plugs in through [`PdfExtractor::with_fallback`], and any
//! backend can be replaced through [`ExtractorRegistry::register`].
//!
//! Extraction failures are reported as [`ExtractError`] and never reach the
//! analyzer as clauses.
//!
//! # Example Usage
//!
//! ```no_run
//! use contractguard_extractor::ExtractorRegistry;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ExtractorRegistry::with_defaults();
//! let extracted = registry.extract("contract.txt")?;
//! println!("{} chars of {}", extracted.text.len(), extracted.kind);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod kind;
mod limits;
mod pdf;
mod plain_text;
mod registry;

pub use contractguard_domain::traits::TextSource;
pub use error::ExtractError;
pub use docx::DocxExtractor;
pub use kind::DocumentKind;
pub use limits::DEFAULT_MAX_BYTES;
pub use pdf::PdfExtractor;
pub use plain_text::{decode_ignoring_errors, PlainTextExtractor};
pub use registry::{ExtractedText, ExtractorRegistry};
