//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

/// How a keyword is matched against a clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment ("term" matches inside "terminal")
    #[default]
    Substring,
    /// Keyword must be bounded by non-alphanumeric characters or the clause edge
    WordBoundary,
}

impl MatchMode {
    /// Name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::WordBoundary => "word_boundary",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Keyword matching semantics
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Clause count at which classification switches to the parallel path
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    512
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AnalyzerConfig {
    /// Word-boundary preset: same as default but with whole-word matching
    pub fn word_boundary() -> Self {
        Self {
            match_mode: MatchMode::WordBoundary,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.parallel_threshold == 0 {
            return Err(AnalyzerError::Config(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_word_boundary_preset() {
        let config = AnalyzerConfig::word_boundary();
        assert_eq!(config.match_mode, MatchMode::WordBoundary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = AnalyzerConfig {
            parallel_threshold: 0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AnalyzerConfig::from_toml("parallel_threshold = 0").is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AnalyzerConfig::from_toml("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_parse_match_mode() {
        let config = AnalyzerConfig::from_toml(r#"match_mode = "word_boundary""#).unwrap();
        assert_eq!(config.match_mode, MatchMode::WordBoundary);
    }

    #[test]
    fn test_match_mode_display_matches_config_name() {
        for mode in [MatchMode::Substring, MatchMode::WordBoundary] {
            let config = AnalyzerConfig::from_toml(&format!("match_mode = \"{}\"", mode)).unwrap();
            assert_eq!(config.match_mode, mode);
        }
        assert_eq!(MatchMode::WordBoundary.to_string(), "word_boundary");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::word_boundary();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
