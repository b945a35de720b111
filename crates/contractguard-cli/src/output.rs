//! Output formatting for the CLI.

use crate::commands::DocumentAnalysis;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use contractguard_analyzer::AnalysisReport;
use contractguard_domain::{AnalysisRecord, Lexicon, Navigator, RiskTier, TierCounts, TierFilter};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Column width for clause text in tables.
const CLAUSE_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the analyses of several documents.
    pub fn format_analyses(&self, documents: &[DocumentAnalysis], filter: TierFilter) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analyses_json(documents, filter),
            OutputFormat::Table => Ok(self.format_analyses_table(documents, filter)),
            OutputFormat::Quiet => Ok(self.format_analyses_quiet(documents, filter)),
        }
    }

    /// Format analyses as a JSON array of reports.
    fn format_analyses_json(&self, documents: &[DocumentAnalysis], filter: TierFilter) -> Result<String> {
        let reports: Vec<AnalysisReport> = documents
            .iter()
            .map(|doc| AnalysisReport::new(doc.source.clone(), &doc.analysis, filter))
            .collect();
        Ok(serde_json::to_string_pretty(&reports)?)
    }

    /// Format analyses as counts and clause tables.
    fn format_analyses_table(&self, documents: &[DocumentAnalysis], filter: TierFilter) -> String {
        let sections: Vec<String> = documents
            .iter()
            .map(|doc| {
                let mut out = String::new();
                out.push_str(&self.colorize(&doc.source, "bold"));
                out.push('\n');
                out.push_str(&self.format_counts(&doc.analysis.tier_counts()));
                out.push('\n');
                out.push_str(&self.format_clause_table(&doc.analysis.filter(filter), filter));
                out
            })
            .collect();
        sections.join("\n\n")
    }

    /// Format analyses in quiet mode (one line per clause).
    fn format_analyses_quiet(&self, documents: &[DocumentAnalysis], filter: TierFilter) -> String {
        let mut lines = Vec::new();
        for doc in documents {
            for record in doc.analysis.filter(filter) {
                lines.push(format!(
                    "{}\t{}\t{}\t{}",
                    doc.source,
                    record.clause.index() + 1,
                    record.tier(),
                    record.keyword().unwrap_or("-")
                ));
            }
        }
        lines.join("\n")
    }

    /// Format tier counts as a one-row table.
    pub fn format_counts(&self, counts: &TierCounts) -> String {
        let mut builder = Builder::default();
        builder.push_record(RiskTier::ALL.iter().map(|t| t.label().to_string()));
        builder.push_record(RiskTier::ALL.iter().map(|t| counts.get(*t).to_string()));

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(..)).with(Alignment::center()));
        table.to_string()
    }

    /// Format a list of records as a table.
    fn format_clause_table(&self, records: &[&AnalysisRecord], filter: TierFilter) -> String {
        if records.is_empty() {
            return self.info(&format!("No clauses found for the selected risk level ({}).", filter));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Risk", "Keyword", "Clause"]);

        for record in records {
            builder.push_record([
                (record.clause.index() + 1).to_string(),
                record.tier().to_string(),
                record.keyword().unwrap_or("").to_string(),
                record.clause.text().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::last()).with(Width::wrap(CLAUSE_WIDTH)));

        table.to_string()
    }

    /// Format the clause under the navigator for the browser.
    pub fn format_clause_view(
        &self,
        record: Option<&AnalysisRecord>,
        navigator: &Navigator,
        filter: TierFilter,
    ) -> String {
        let Some(record) = record else {
            return self.info(&format!("No clauses found for the selected risk level ({}).", filter));
        };

        let mut out = format!(
            "{}  [filter: {}]\n{}  {}",
            self.colorize(&navigator.position_label(), "bold"),
            filter,
            self.tier_badge(record.tier()),
            record.clause.text()
        );
        if let Some(keyword) = record.keyword() {
            out.push_str(&format!("\nFlagged keyword: {}", keyword));
        }
        out
    }

    /// Format the lexicon.
    pub fn format_lexicon(&self, lexicon: &Lexicon) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let tiers: Vec<serde_json::Value> = lexicon
                    .tiers()
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "tier": entry.tier.as_str(),
                            "color": entry.tier.color(),
                            "keywords": entry.keywords,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&tiers)?)
            }
            OutputFormat::Quiet => Ok(lexicon
                .iter()
                .map(|(tier, keyword)| format!("{}\t{}", tier, keyword))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Tier", "Meaning", "Count", "Keywords (match order)"]);
                for entry in lexicon.tiers() {
                    builder.push_record([
                        entry.tier.to_string(),
                        entry.tier.description().to_string(),
                        entry.keywords.len().to_string(),
                        entry.keywords.join(", "),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()))
                    .with(Modify::new(Columns::last()).with(Width::wrap(CLAUSE_WIDTH)));
                Ok(table.to_string())
            }
        }
    }

    /// Format a tier as a badge in the tier's color.
    pub fn tier_badge(&self, tier: RiskTier) -> String {
        self.colorize(&format!("[{}]", tier), tier.color())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "orange" => text.truecolor(255, 179, 0).to_string(),
            "green" => text.green().to_string(),
            "gray" => text.bright_black().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contractguard_analyzer::Analyzer;

    fn documents() -> Vec<DocumentAnalysis> {
        let analysis = Analyzer::builtin().analyze(
            "The Vendor may terminate this agreement without notice. Governing law shall be Delaware. The sky is blue.",
        );
        vec![DocumentAnalysis {
            source: "nda.txt".to_string(),
            analysis,
        }]
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analyses(&documents(), TierFilter::All).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["source"], "nda.txt");
        assert_eq!(value[0]["counts"]["High"], 1);
        assert_eq!(value[0]["clauses"][1]["keyword"], "governing law");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_analyses(&documents(), TierFilter::Tier(RiskTier::High))
            .unwrap();
        assert_eq!(output, "nda.txt\t1\tHigh\twithout notice");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analyses(&documents(), TierFilter::All).unwrap();
        assert!(output.contains("High Risk"));
        assert!(output.contains("Unflagged"));
        assert!(output.contains("governing law"));
        assert!(output.contains("Clause"));
    }

    #[test]
    fn test_table_with_empty_filter() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_analyses(&documents(), TierFilter::Tier(RiskTier::Low))
            .unwrap();
        assert!(output.contains("No clauses found for the selected risk level (Low)."));
    }

    #[test]
    fn test_clause_view() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let docs = documents();
        let records = docs[0].analysis.records();
        let navigator = Navigator::new(records.len());

        let view = formatter.format_clause_view(records.first(), &navigator, TierFilter::All);
        assert_eq!(
            view,
            "Clause 1 of 3  [filter: All]\n[High]  The Vendor may terminate this agreement without notice.\nFlagged keyword: without notice"
        );
    }

    #[test]
    fn test_clause_view_unflagged_has_no_keyword_line() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let docs = documents();
        let records = docs[0].analysis.records();
        let mut navigator = Navigator::new(records.len());
        navigator.jump(2);

        let view = formatter.format_clause_view(records.get(2), &navigator, TierFilter::All);
        assert!(view.starts_with("Clause 3 of 3"));
        assert!(view.contains("[None]"));
        assert!(!view.contains("Flagged keyword"));
    }

    #[test]
    fn test_lexicon_quiet_keeps_match_order() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_lexicon(&Lexicon::builtin()).unwrap();
        let first: Vec<&str> = output.lines().take(2).collect();
        assert_eq!(first, vec!["High\tindemnify", "High\thold harmless"]);
        assert_eq!(output.lines().last(), Some("Low\tsignatures"));
    }

    #[test]
    fn test_lexicon_json_in_precedence_order() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_lexicon(&Lexicon::builtin()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["tier"], "High");
        assert_eq!(value[1]["tier"], "Medium");
        assert_eq!(value[2]["tier"], "Low");
        assert_eq!(value[1]["color"], "orange");
    }

    #[test]
    fn test_lexicon_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_lexicon(&Lexicon::builtin()).unwrap();
        assert!(output.contains("Clauses requiring careful consideration."));
        assert!(output.contains("22"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.tier_badge(RiskTier::Medium), "[Medium]");
    }

    #[test]
    fn test_tier_badge_uses_tier_color() {
        colored::control::set_override(true);
        let formatter = Formatter::new(OutputFormat::Table, true);
        let badges: Vec<String> = RiskTier::ALL.iter().map(|t| formatter.tier_badge(*t)).collect();
        let expected = vec![
            "[High]".red().to_string(),
            "[Medium]".truecolor(255, 179, 0).to_string(),
            "[Low]".green().to_string(),
            "[None]".bright_black().to_string(),
        ];
        colored::control::unset_override();

        assert_eq!(badges, expected);
        assert!(badges[0].contains("\u{1b}[31m"));
    }
}
