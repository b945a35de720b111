//! ContractGuard Analyzer
//!
//! Splits contract text into clauses and rates each clause against a tiered
//! keyword lexicon.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Clauses → KeywordClassifier → AnalysisRecords → Analysis
//! ```
//!
//! # Key Features
//!
//! - **Segmentation**: sentence-like splitting on `.`, `!` or `?` followed by
//!   whitespace and an uppercase letter
//! - **Classification**: first keyword by tier precedence, then declaration order
//! - **Reporting**: tier counts, tier filters and serializable records
//! - **Large documents**: optional parallel classification with identical output
//!
//! # Example Usage
//!
//! ```
//! use contractguard_analyzer::{Analyzer, AnalyzerConfig};
//! use contractguard_domain::{Lexicon, RiskTier};
//!
//! let analyzer = Analyzer::new(Lexicon::builtin(), AnalyzerConfig::default());
//! let analysis = analyzer.analyze(
//!     "The Vendor may terminate this agreement without notice. Governing law shall be Delaware.",
//! );
//!
//! assert_eq!(analysis.len(), 2);
//! assert_eq!(analysis.records()[0].tier(), RiskTier::High);
//! assert_eq!(analysis.records()[1].keyword(), Some("governing law"));
//! ```

#![warn(missing_docs)]

mod analyzer;
mod classifier;
mod config;
mod error;
mod lexicon_file;
mod report;
mod segmenter;


pub use analyzer::{Analysis, AnalysisOutcome, Analyzer};
pub use classifier::KeywordClassifier;
pub use config::{AnalyzerConfig, MatchMode};
pub use error::AnalyzerError;
pub use lexicon_file::{load_lexicon, lexicon_from_toml, lexicon_to_toml};
pub use report::{AnalysisReport, ClauseReport, CountsReport};
pub use segmenter::{Fragments, Segmenter};
