//! Lexicon module - the ordered, tiered keyword list
//!
//! Match precedence depends on iteration order, so the lexicon stores its
//! tiers and keywords in `Vec`s: tiers always in `RiskTier::RANKED` order,
//! keywords in the order they were declared.

use crate::{LexiconError, RiskTier};

/// Built-in High tier keywords, in match order
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "indemnify",
    "hold harmless",
    "unlimited liability",
    "penalty",
    "liquidated damages",
    "termination without cause",
    "exclusive remedy",
    "waiver of subrogation",
    "non-compete",
    "non-solicitation",
    "automatic renewal",
    "one-sided",
    "irrevocable",
    "perpetual",
    "unilateral",
    "forfeit",
    "forfeiture",
    "no liability",
    "sole discretion",
    "without notice",
    "as is",
    "no warranty",
];

/// Built-in Medium tier keywords, in match order
pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "limitation of liability",
    "cap on damages",
    "notice period",
    "assignment",
    "governing law",
    "jurisdiction",
    "arbitration",
    "dispute resolution",
    "intellectual property",
    "ownership",
    "confidentiality",
    "force majeure",
    "payment terms",
    "late fee",
    "interest",
    "termination for convenience",
];

/// Built-in Low tier keywords, in match order
pub const LOW_RISK_KEYWORDS: &[&str] = &[
    "term",
    "renewal",
    "scope of work",
    "definitions",
    "entire agreement",
    "severability",
    "counterparts",
    "notices",
    "amendment",
    "signatures",
];

/// Keywords declared for one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierKeywords {
    /// The tier these keywords flag
    pub tier: RiskTier,

    /// Lowercase keywords in declaration order
    pub keywords: Vec<String>,
}

impl TierKeywords {
    /// Create a tier entry from any iterable of keywords
    pub fn new<I, S>(tier: RiskTier, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tier,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// The tiered keyword lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    tiers: Vec<TierKeywords>,
}

impl Lexicon {
    /// Build a lexicon from tier entries
    ///
    /// Entries may be given in any order; the lexicon is stored in
    /// precedence order. Keywords are trimmed and lowercased. Tiers that
    /// are not declared are empty.
    ///
    /// # Errors
    /// Fails on empty keywords, keywords repeated within a tier, tiers
    /// declared twice, or keywords declared for `RiskTier::None`. A `None`
    /// entry with no keywords is accepted and ignored.
    pub fn new(entries: Vec<TierKeywords>) -> Result<Self, LexiconError> {
        let mut tiers = Vec::with_capacity(RiskTier::RANKED.len());

        for entry in &entries {
            if !entry.tier.is_flagged() && !entry.keywords.is_empty() {
                return Err(LexiconError::NoneTier);
            }
        }

        for tier in RiskTier::RANKED {
            let mut declared = entries.iter().filter(|e| e.tier == tier);
            let Some(entry) = declared.next() else {
                tiers.push(TierKeywords::new(tier, Vec::<String>::new()));
                continue;
            };
            if declared.next().is_some() {
                return Err(LexiconError::DuplicateTier(tier));
            }

            let mut keywords: Vec<String> = Vec::with_capacity(entry.keywords.len());
            for raw in &entry.keywords {
                let keyword = raw.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(LexiconError::EmptyKeyword { tier });
                }
                if keywords.contains(&keyword) {
                    return Err(LexiconError::DuplicateKeyword { tier, keyword });
                }
                keywords.push(keyword);
            }
            tiers.push(TierKeywords { tier, keywords });
        }

        Ok(Self { tiers })
    }

    /// The keyword list ContractGuard ships with
    pub fn builtin() -> Self {
        let tiers = vec![
            TierKeywords::new(RiskTier::High, HIGH_RISK_KEYWORDS.iter().copied()),
            TierKeywords::new(RiskTier::Medium, MEDIUM_RISK_KEYWORDS.iter().copied()),
            TierKeywords::new(RiskTier::Low, LOW_RISK_KEYWORDS.iter().copied()),
        ];
        Self { tiers }
    }

    /// Tier entries in precedence order
    pub fn tiers(&self) -> &[TierKeywords] {
        &self.tiers
    }

    /// Keywords declared for `tier` (empty for `None`)
    pub fn keywords(&self, tier: RiskTier) -> &[String] {
        self.tiers
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Every (tier, keyword) pair in match order
    pub fn iter(&self) -> impl Iterator<Item = (RiskTier, &str)> + '_ {
        self.tiers
            .iter()
            .flat_map(|entry| entry.keywords.iter().map(move |k| (entry.tier, k.as_str())))
    }

    /// Total number of keywords across all tiers
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|entry| entry.keywords.len()).sum()
    }

    /// Whether the lexicon has no keywords at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
