//! Error types for lexicon construction

use crate::RiskTier;
use thiserror::Error;

/// Errors raised while building a lexicon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A keyword was empty after trimming
    #[error("Empty keyword in {tier} tier")]
    EmptyKeyword {
        /// Tier the keyword was declared under
        tier: RiskTier,
    },

    /// The same keyword appears twice in one tier
    #[error("Duplicate keyword '{keyword}' in {tier} tier")]
    DuplicateKeyword {
        /// Tier the keyword was declared under
        tier: RiskTier,
        /// The repeated keyword
        keyword: String,
    },

    /// A tier was declared more than once
    #[error("Tier declared more than once: {0}")]
    DuplicateTier(RiskTier),

    /// Keywords were declared for the `None` tier
    #[error("The None tier cannot carry keywords")]
    NoneTier,
}
