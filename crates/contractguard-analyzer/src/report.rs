//! Serializable views of an analysis

use crate::analyzer::Analysis;
use contractguard_domain::{AnalysisRecord, TierCounts, TierFilter};
use serde::Serialize;

/// One analyzed clause, as handed to presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseReport {
    /// Position of the clause in the document
    pub index: usize,
    /// Clause text
    pub clause: String,
    /// Tier name: High, Medium, Low or None
    pub risk: &'static str,
    /// Matched keyword, `null` when unflagged
    pub keyword: Option<String>,
    /// Display color for the tier
    pub color: &'static str,
}

impl From<&AnalysisRecord> for ClauseReport {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            index: record.clause.index(),
            clause: record.clause.text().to_string(),
            risk: record.tier().as_str(),
            keyword: record.keyword().map(str::to_string),
            color: record.classification.color(),
        }
    }
}

/// Tier counts keyed by tier name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountsReport {
    /// High tier clauses
    pub high: usize,
    /// Medium tier clauses
    pub medium: usize,
    /// Low tier clauses
    pub low: usize,
    /// Unflagged clauses
    pub none: usize,
}

impl From<TierCounts> for CountsReport {
    fn from(counts: TierCounts) -> Self {
        Self {
            high: counts.high,
            medium: counts.medium,
            low: counts.low,
            none: counts.none,
        }
    }
}

/// Full report for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Where the text came from (file name or label)
    pub source: String,
    /// Counts over every clause, ignoring the filter
    pub counts: CountsReport,
    /// Filter applied to `clauses`
    pub filter: String,
    /// Clauses passing the filter, in document order
    pub clauses: Vec<ClauseReport>,
}

impl AnalysisReport {
    /// Build a report for `analysis`, listing only clauses passing `filter`
    pub fn new(source: impl Into<String>, analysis: &Analysis, filter: TierFilter) -> Self {
        Self {
            source: source.into(),
            counts: analysis.tier_counts().into(),
            filter: filter.to_string(),
            clauses: analysis
                .filter(filter)
                .into_iter()
                .map(ClauseReport::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Analyzer, AnalyzerConfig};
    use contractguard_domain::{Lexicon, RiskTier};

    #[test]
    fn test_clause_report_json_shape() {
        let analyzer = Analyzer::new(Lexicon::builtin(), AnalyzerConfig::default());
        let analysis = analyzer.analyze("Supplier shall indemnify Buyer. The parties met on Tuesday.");
        let report = AnalysisReport::new("contract.txt", &analysis, TierFilter::All);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "contract.txt");
        assert_eq!(json["counts"]["High"], 1);
        assert_eq!(json["counts"]["None"], 1);
        assert_eq!(json["clauses"][0]["risk"], "High");
        assert_eq!(json["clauses"][0]["keyword"], "indemnify");
        assert_eq!(json["clauses"][0]["color"], "red");
        assert_eq!(json["clauses"][1]["risk"], "None");
        assert!(json["clauses"][1]["keyword"].is_null());
        assert_eq!(json["clauses"][1]["color"], "gray");
    }

    #[test]
    fn test_filter_keeps_full_counts() {
        let analyzer = Analyzer::new(Lexicon::builtin(), AnalyzerConfig::default());
        let analysis = analyzer.analyze("Supplier shall indemnify Buyer. The parties met on Tuesday.");
        let report = AnalysisReport::new("x", &analysis, TierFilter::Tier(RiskTier::None));

        assert_eq!(report.counts.high, 1);
        assert_eq!(report.filter, "None");
        assert_eq!(report.clauses.len(), 1);
        assert_eq!(report.clauses[0].index, 1);
    }
}
