//! Tier module - risk severity buckets for clauses

use std::fmt;

/// Risk tier assigned to a clause
///
/// Tiers are checked in precedence order when classifying:
/// - High: potentially harmful or one-sided language
/// - Medium: clauses requiring careful consideration
/// - Low: standard, balanced boilerplate
/// - None: no keyword matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskTier {
    /// Potentially harmful or one-sided clauses
    High,

    /// Clauses requiring careful consideration
    Medium,

    /// Standard, balanced clauses
    Low,

    /// No detected risk
    None,
}

impl RiskTier {
    /// Tiers that carry keywords, in match precedence order
    pub const RANKED: [RiskTier; 3] = [RiskTier::High, RiskTier::Medium, RiskTier::Low];

    /// Every tier, including `None`, in report order
    pub const ALL: [RiskTier; 4] = [
        RiskTier::High,
        RiskTier::Medium,
        RiskTier::Low,
        RiskTier::None,
    ];

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
            RiskTier::None => "None",
        }
    }

    /// Parse a tier from a string, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(RiskTier::High),
            "medium" => Some(RiskTier::Medium),
            "low" => Some(RiskTier::Low),
            "none" => Some(RiskTier::None),
            _ => None,
        }
    }

    /// Display color for this tier
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::High => "red",
            RiskTier::Medium => "orange",
            RiskTier::Low => "green",
            RiskTier::None => "gray",
        }
    }

    /// Heading used when reporting tier counts
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::Low => "Low Risk",
            RiskTier::None => "Unflagged",
        }
    }

    /// One-line explanation of the tier
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::High => "Potentially harmful or one-sided clauses.",
            RiskTier::Medium => "Clauses requiring careful consideration.",
            RiskTier::Low => "Standard, balanced clauses.",
            RiskTier::None => "Clauses with no detected risk.",
        }
    }

    /// Whether this tier means a keyword matched
    pub fn is_flagged(&self) -> bool {
        !matches!(self, RiskTier::None)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid risk tier: {}", s))
    }
}
