//! TOML lexicon files
//!
//! ```toml
//! [[tiers]]
//! tier = "high"
//! keywords = ["indemnify", "hold harmless"]
//!
//! [[tiers]]
//! tier = "medium"
//! keywords = ["governing law"]
//! ```

use crate::error::AnalyzerError;
use contractguard_domain::{Lexicon, RiskTier, TierKeywords};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    tiers: Vec<TierEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TierEntry {
    tier: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse a lexicon from TOML
pub fn lexicon_from_toml(toml_str: &str) -> Result<Lexicon, AnalyzerError> {
    let file: LexiconFile = toml::from_str(toml_str)?;

    let entries = file
        .tiers
        .into_iter()
        .map(|entry| {
            let tier = RiskTier::parse(&entry.tier)
                .ok_or_else(|| AnalyzerError::Config(format!("Unknown tier '{}'", entry.tier)))?;
            Ok(TierKeywords::new(tier, entry.keywords))
        })
        .collect::<Result<Vec<_>, AnalyzerError>>()?;

    Ok(Lexicon::new(entries)?)
}

/// Load a lexicon from a TOML file
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon, AnalyzerError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let lexicon = lexicon_from_toml(&contents)?;
    debug!("Loaded {} keywords from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Serialize a lexicon to TOML, tiers in precedence order
pub fn lexicon_to_toml(lexicon: &Lexicon) -> Result<String, AnalyzerError> {
    let file = LexiconFile {
        tiers: lexicon
            .tiers()
            .iter()
            .map(|entry| TierEntry {
                tier: entry.tier.as_str().to_lowercase(),
                keywords: entry.keywords.clone(),
            })
            .collect(),
    };
    Ok(toml::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contractguard_domain::LexiconError;
    use std::io::Write;

    #[test]
    fn test_parse_lexicon() {
        let toml = r#"
            [[tiers]]
            tier = "low"
            keywords = ["term", "renewal"]

            [[tiers]]
            tier = "High"
            keywords = ["Indemnify"]
        "#;

        let lexicon = lexicon_from_toml(toml).unwrap();
        let pairs: Vec<(RiskTier, &str)> = lexicon.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (RiskTier::High, "indemnify"),
                (RiskTier::Low, "term"),
                (RiskTier::Low, "renewal"),
            ]
        );
    }

    #[test]
    fn test_empty_file_is_empty_lexicon() {
        let lexicon = lexicon_from_toml("").unwrap();
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let toml = r#"
            [[tiers]]
            tier = "critical"
            keywords = ["x"]
        "#;
        assert!(matches!(lexicon_from_toml(toml), Err(AnalyzerError::Config(_))));
    }

    #[test]
    fn test_invalid_lexicon_rejected() {
        let toml = r#"
            [[tiers]]
            tier = "none"
            keywords = ["x"]
        "#;
        assert!(matches!(
            lexicon_from_toml(toml),
            Err(AnalyzerError::Lexicon(LexiconError::NoneTier))
        ));
    }

    #[test]
    fn test_empty_none_tier_allowed() {
        let toml = r#"
            [[tiers]]
            tier = "none"
            keywords = []

            [[tiers]]
            tier = "high"
            keywords = ["penalty"]
        "#;
        let lexicon = lexicon_from_toml(toml).unwrap();
        assert_eq!(lexicon.keywords(RiskTier::High), ["penalty".to_string()]);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            lexicon_from_toml("[[tiers]\n"),
            Err(AnalyzerError::TomlParse(_))
        ));
    }

    #[test]
    fn test_builtin_round_trip() {
        let builtin = Lexicon::builtin();
        let toml_str = lexicon_to_toml(&builtin).unwrap();
        assert_eq!(lexicon_from_toml(&toml_str).unwrap(), builtin);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[tiers]]\ntier = \"medium\"\nkeywords = [\"escrow\"]").unwrap();

        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.keywords(RiskTier::Medium), ["escrow".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_lexicon("/nonexistent/lexicon.toml");
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }
}
