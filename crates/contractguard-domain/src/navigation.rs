//! Navigation module - session-scoped browsing over analyzed clauses
//!
//! A `Navigator` belongs to one browsing session. It is passed explicitly
//! to whatever renders clauses; nothing here is process-wide.

use crate::{AnalysisRecord, RiskTier};
use std::fmt;

/// Bound `index` to `[0, len - 1]`
///
/// An empty list clamps every index to 0.
///
/// # Examples
///
/// ```
/// use contractguard_domain::clamp_index;
///
/// assert_eq!(clamp_index(5, 3), 2);
/// assert_eq!(clamp_index(1, 3), 1);
/// assert_eq!(clamp_index(7, 0), 0);
/// ```
pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

/// Cursor over a list of `len` clauses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// Start at the first of `len` clauses
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current zero-based position
    pub fn current(&self) -> usize {
        self.index
    }

    /// Number of clauses being browsed
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to browse
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `next` would move
    pub fn has_next(&self) -> bool {
        self.len > 0 && self.index < self.len - 1
    }

    /// Whether `previous` would move
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Advance one clause, stopping at the last
    pub fn next(&mut self) -> usize {
        if self.has_next() {
            self.index += 1;
        }
        self.index
    }

    /// Step back one clause, stopping at the first
    pub fn previous(&mut self) -> usize {
        if self.has_previous() {
            self.index -= 1;
        }
        self.index
    }

    /// Jump to `index`, clamped into range
    pub fn jump(&mut self, index: usize) -> usize {
        self.index = clamp_index(index, self.len);
        self.index
    }

    /// Change the list length (after a filter change) and re-clamp
    pub fn resize(&mut self, len: usize) -> usize {
        self.len = len;
        self.index = clamp_index(self.index, len);
        self.index
    }

    /// Human-readable position, e.g. "Clause 2 of 7"
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return "No clauses".to_string();
        }
        format!("Clause {} of {}", self.index + 1, self.len)
    }
}

/// Which clauses to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierFilter {
    /// Every clause
    #[default]
    All,

    /// Only clauses of one tier
    Tier(RiskTier),
}

impl TierFilter {
    /// Whether a record passes the filter
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Tier(tier) => record.tier() == *tier,
        }
    }

    /// Parse `all`, `high`, `medium`, `low` or `none`, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(TierFilter::All);
        }
        RiskTier::parse(s).map(TierFilter::Tier)
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFilter::All => f.write_str("All"),
            TierFilter::Tier(tier) => write!(f, "{}", tier),
        }
    }
}

impl std::str::FromStr for TierFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid filter: {} (expected all, high, medium, low or none)", s))
    }
}
