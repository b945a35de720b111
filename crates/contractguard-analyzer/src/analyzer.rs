//! Core Analyzer implementation

use crate::classifier::KeywordClassifier;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::segmenter::Segmenter;
use contractguard_domain::traits::ClauseClassifier;
use contractguard_domain::{AnalysisRecord, Clause, Lexicon, TierCounts, TierFilter};
use rayon::prelude::*;
use tracing::{debug, info};

/// Whether there was anything to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The input was empty or whitespace only
    NothingToAnalyze,
    /// The input produced at least one clause
    Analyzed,
}

/// Ordered analysis results for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    records: Vec<AnalysisRecord>,
    outcome: AnalysisOutcome,
}

impl Analysis {
    fn new(records: Vec<AnalysisRecord>) -> Self {
        let outcome = if records.is_empty() {
            AnalysisOutcome::NothingToAnalyze
        } else {
            AnalysisOutcome::Analyzed
        };
        Self { records, outcome }
    }

    /// Records in document order
    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    /// Whether any clause was found
    pub fn outcome(&self) -> AnalysisOutcome {
        self.outcome
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no clause was found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clause count per tier
    pub fn tier_counts(&self) -> TierCounts {
        TierCounts::from_records(&self.records)
    }

    /// Records passing `filter`, in document order
    pub fn filter(&self, filter: TierFilter) -> Vec<&AnalysisRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}

/// Segments text and classifies every clause
pub struct Analyzer<C = KeywordClassifier>
where
    C: ClauseClassifier,
{
    segmenter: Segmenter,
    classifier: C,
    config: AnalyzerConfig,
}

impl Analyzer<KeywordClassifier> {
    /// Create an analyzer over `lexicon`
    ///
    /// The configured match mode is applied to the keyword classifier.
    pub fn new(lexicon: Lexicon, config: AnalyzerConfig) -> Self {
        let classifier = KeywordClassifier::new(lexicon).with_match_mode(config.match_mode);
        Self {
            segmenter: Segmenter::new(),
            classifier,
            config,
        }
    }

    /// Create an analyzer over the built-in lexicon with default settings
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin(), AnalyzerConfig::default())
    }

    /// Create an analyzer after validating `config`
    pub fn try_new(lexicon: Lexicon, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self::new(lexicon, config))
    }
}

impl<C> Analyzer<C>
where
    C: ClauseClassifier + Sync,
{
    /// Create an analyzer with a custom classifier
    pub fn with_classifier(classifier: C, config: AnalyzerConfig) -> Self {
        Self {
            segmenter: Segmenter::new(),
            classifier,
            config,
        }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Analyze `text`
    ///
    /// Documents with at least `parallel_threshold` clauses are classified
    /// on the rayon pool; the result is identical either way.
    pub fn analyze(&self, text: &str) -> Analysis {
        let clauses = self.segmenter.segment(text);

        info!(
            "Analyzing {} chars, {} clauses",
            text.len(),
            clauses.len()
        );

        let analysis = if clauses.len() >= self.config.parallel_threshold {
            debug!("Classifying in parallel");
            self.classify_parallel(clauses)
        } else {
            self.classify_sequential(clauses)
        };

        let counts = analysis.tier_counts();
        info!(
            "Analysis complete: {} high, {} medium, {} low, {} unflagged",
            counts.high, counts.medium, counts.low, counts.none
        );

        analysis
    }

    /// Analyze `text` on the current thread
    pub fn analyze_sequential(&self, text: &str) -> Analysis {
        self.classify_sequential(self.segmenter.segment(text))
    }

    /// Analyze `text`, classifying clauses on the rayon pool
    pub fn analyze_parallel(&self, text: &str) -> Analysis {
        self.classify_parallel(self.segmenter.segment(text))
    }

    fn classify_sequential(&self, clauses: Vec<Clause>) -> Analysis {
        let records = clauses
            .into_iter()
            .map(|clause| self.record(clause))
            .collect();
        Analysis::new(records)
    }

    fn classify_parallel(&self, clauses: Vec<Clause>) -> Analysis {
        // Indexed collect keeps document order
        let records = clauses
            .into_par_iter()
            .map(|clause| self.record(clause))
            .collect();
        Analysis::new(records)
    }

    fn record(&self, clause: Clause) -> AnalysisRecord {
        let classification = self.classifier.classify(&clause);
        AnalysisRecord::new(clause, classification)
    }
}
