//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::build_analyzer;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use contractguard_analyzer::{Analysis, AnalysisOutcome, Analyzer};
use contractguard_domain::TierFilter;
use contractguard_extractor::ExtractorRegistry;
use std::path::{Path, PathBuf};

/// The analysis of one document, labelled with where it came from.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub source: String,
    pub analysis: Analysis,
}

/// Results of analyzing several documents.
#[derive(Debug, Default)]
pub struct BatchAnalysis {
    /// Documents with at least one clause
    pub documents: Vec<DocumentAnalysis>,

    /// Documents that yielded no text
    pub empty: Vec<PathBuf>,

    /// Documents that could not be read
    pub failures: Vec<(PathBuf, CliError)>,
}

/// Extract and analyze one document. Returns `None` when the document has no
/// text to analyze.
pub fn analyze_file(
    registry: &ExtractorRegistry,
    analyzer: &Analyzer,
    path: &Path,
) -> Result<Option<DocumentAnalysis>> {
    let extracted = registry.extract(path)?;
    let analysis = analyzer.analyze(&extracted.text);

    if analysis.outcome() == AnalysisOutcome::NothingToAnalyze {
        return Ok(None);
    }

    Ok(Some(DocumentAnalysis {
        source: path.display().to_string(),
        analysis,
    }))
}

/// Analyze every path. A failing document does not stop the others.
pub fn analyze_files(registry: &ExtractorRegistry, analyzer: &Analyzer, paths: &[PathBuf]) -> BatchAnalysis {
    let mut batch = BatchAnalysis::default();

    for path in paths {
        match analyze_file(registry, analyzer, path) {
            Ok(Some(document)) => batch.documents.push(document),
            Ok(None) => batch.empty.push(path.clone()),
            Err(e) => batch.failures.push((path.clone(), e)),
        }
    }

    batch
}

/// Warning printed to stderr for a document that yielded no text.
pub fn empty_document_warning(formatter: &Formatter, path: &Path) -> String {
    formatter.warning(&format!("{}: No text found in document.", path.display()))
}

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let analyzer = build_analyzer(config, &args.lexicon)?;
    let registry = ExtractorRegistry::with_defaults();
    let filter: TierFilter = args.filter.into();

    let batch = analyze_files(&registry, &analyzer, &args.files);

    for path in &batch.empty {
        eprintln!("{}", empty_document_warning(formatter, path));
    }
    for (path, error) in &batch.failures {
        eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), error)));
    }

    if !batch.documents.is_empty() {
        println!("{}", formatter.format_analyses(&batch.documents, filter)?);
    }

    if !batch.failures.is_empty() {
        return Err(CliError::ExtractionFailed(batch.failures.len()));
    }

    Ok(())
}
