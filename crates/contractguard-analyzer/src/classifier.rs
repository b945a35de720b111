//! Keyword-based risk classification

use crate::config::MatchMode;
use contractguard_domain::traits::ClauseClassifier;
use contractguard_domain::{Classification, Clause, Lexicon};

/// Rates clauses by scanning a tiered lexicon
///
/// The clause is lowercased once. Tiers are tried High, Medium, Low; within
/// a tier keywords are tried in declaration order. The first hit wins.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    lexicon: Lexicon,
    match_mode: MatchMode,
}

impl KeywordClassifier {
    /// Create a classifier over `lexicon` using substring matching
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            match_mode: MatchMode::Substring,
        }
    }

    /// Change the matching semantics
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The matching semantics in use
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Classify raw clause text
    pub fn classify_text(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();

        for (tier, keyword) in self.lexicon.iter() {
            if self.is_match(&lowered, keyword) {
                return Classification::matched(tier, keyword);
            }
        }

        Classification::unflagged()
    }

    fn is_match(&self, haystack: &str, keyword: &str) -> bool {
        match self.match_mode {
            MatchMode::Substring => haystack.contains(keyword),
            MatchMode::WordBoundary => contains_word(haystack, keyword),
        }
    }
}

impl ClauseClassifier for KeywordClassifier {
    fn classify(&self, clause: &Clause) -> Classification {
        self.classify_text(clause.text())
    }
}

/// Whether `keyword` occurs in `haystack` with no alphanumeric neighbour
///
/// Every start position is tried, so overlapping occurrences count.
fn contains_word(haystack: &str, keyword: &str) -> bool {
    let Some(first) = keyword.chars().next() else {
        return false;
    };

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(keyword) {
        let start = from + offset;
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + keyword.len()..].chars().next();
        if !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric) {
            return true;
        }
        from = start + first.len_utf8();
    }
    false
}
