//! ContractGuard Domain Layer
//!
//! This crate contains the value types shared by every other ContractGuard
//! crate. It holds no I/O and no analysis logic of its own; it only defines
//! the vocabulary the analyzer, the extractor and the CLI speak.
//!
//! ## Key Concepts
//!
//! - **Clause**: a trimmed, non-empty, document-ordered unit of contract text
//! - **Risk Tier**: High, Medium, Low or None, with a fixed precedence
//! - **Lexicon**: the ordered, tiered keyword list used for matching
//! - **Classification**: the tier and matched keyword attached to one clause
//! - **Navigator**: session-scoped cursor over a list of analyzed clauses
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Trait definitions for the seams other crates implement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classification;
pub mod clause;
pub mod counts;
pub mod error;
pub mod lexicon;
pub mod navigation;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use classification::{AnalysisRecord, Classification};
pub use clause::{is_clause_whitespace, Clause};
pub use counts::TierCounts;
pub use error::LexiconError;
pub use lexicon::{Lexicon, TierKeywords};
pub use navigation::{clamp_index, Navigator, TierFilter};
pub use tier::RiskTier;
