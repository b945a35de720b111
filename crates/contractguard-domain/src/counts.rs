//! Per-tier clause counts

use crate::{AnalysisRecord, RiskTier};

/// Number of clauses in each tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    /// High tier clauses
    pub high: usize,
    /// Medium tier clauses
    pub medium: usize,
    /// Low tier clauses
    pub low: usize,
    /// Unflagged clauses
    pub none: usize,
}

impl TierCounts {
    /// Count the tiers of a set of records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisRecord>,
    {
        let mut counts = Self::default();
        for record in records {
            counts.record(record.tier());
        }
        counts
    }

    /// Add one clause of `tier`
    pub fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::High => self.high += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::Low => self.low += 1,
            RiskTier::None => self.none += 1,
        }
    }

    /// Count for a single tier
    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
            RiskTier::None => self.none,
        }
    }

    /// Total number of clauses counted
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.none
    }

    /// Number of clauses with any flagged tier
    pub fn flagged(&self) -> usize {
        self.high + self.medium + self.low
    }
}
