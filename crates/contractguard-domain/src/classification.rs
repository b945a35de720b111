//! Classification module - the risk label attached to one clause

use crate::{Clause, RiskTier};

/// Result of classifying a single clause
///
/// The matched keyword is present exactly when the tier is flagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    tier: RiskTier,
    keyword: Option<String>,
}

impl Classification {
    /// A classification for a clause that matched `keyword` in `tier`
    ///
    /// Passing `RiskTier::None` yields an unflagged classification and the
    /// keyword is discarded.
    pub fn matched(tier: RiskTier, keyword: impl Into<String>) -> Self {
        if !tier.is_flagged() {
            return Self::unflagged();
        }
        Self {
            tier,
            keyword: Some(keyword.into()),
        }
    }

    /// A classification for a clause no keyword matched
    pub fn unflagged() -> Self {
        Self {
            tier: RiskTier::None,
            keyword: None,
        }
    }

    /// The assigned tier
    pub fn tier(&self) -> RiskTier {
        self.tier
    }

    /// The first lexicon keyword found in the clause, if any
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Display color, derived from the tier
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }
}

/// A clause paired with its classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisRecord {
    /// The analyzed clause
    pub clause: Clause,

    /// Its risk classification
    pub classification: Classification,
}

impl AnalysisRecord {
    /// Pair a clause with its classification
    pub fn new(clause: Clause, classification: Classification) -> Self {
        Self {
            clause,
            classification,
        }
    }

    /// Shortcut for the record's tier
    pub fn tier(&self) -> RiskTier {
        self.classification.tier()
    }

    /// Shortcut for the matched keyword
    pub fn keyword(&self) -> Option<&str> {
        self.classification.keyword()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_carries_keyword() {
        let c = Classification::matched(RiskTier::High, "indemnify");
        assert_eq!(c.tier(), RiskTier::High);
        assert_eq!(c.keyword(), Some("indemnify"));
        assert_eq!(c.color(), "red");
    }

    #[test]
    fn test_unflagged_has_no_keyword() {
        let c = Classification::unflagged();
        assert_eq!(c.tier(), RiskTier::None);
        assert_eq!(c.keyword(), None);
        assert_eq!(c.color(), "gray");
    }

    #[test]
    fn test_matched_with_none_tier_drops_keyword() {
        let c = Classification::matched(RiskTier::None, "term");
        assert_eq!(c, Classification::unflagged());
    }
}
