//! Command implementations.

pub mod analyze;
pub mod browse;
pub mod config;
pub mod lexicon;

pub use self::analyze::{
    analyze_file, analyze_files, empty_document_warning, execute_analyze, BatchAnalysis, DocumentAnalysis,
};
pub use self::browse::execute_browse;
pub use self::config::{execute_config, init_config};
pub use self::lexicon::execute_lexicon;

use crate::cli::LexiconOpts;
use crate::config::Config;
use crate::error::Result;
use contractguard_analyzer::{load_lexicon, Analyzer, MatchMode};
use contractguard_domain::Lexicon;
use std::path::Path;
use tracing::debug;

/// Resolve the active lexicon: `override_path`, then the configured
/// `lexicon_path`, then the built-in lexicon.
pub fn resolve_lexicon(config: &Config, override_path: Option<&Path>) -> Result<Lexicon> {
    match override_path.or(config.lexicon_path.as_deref()) {
        Some(path) => {
            debug!("Using lexicon file {}", path.display());
            Ok(load_lexicon(path)?)
        }
        None => Ok(Lexicon::builtin()),
    }
}

/// Build an analyzer from the configuration and command-line options.
pub fn build_analyzer(config: &Config, opts: &LexiconOpts) -> Result<Analyzer> {
    let lexicon = resolve_lexicon(config, opts.lexicon.as_deref())?;

    let mut analyzer_config = config.analyzer.clone();
    if opts.word_boundary {
        analyzer_config.match_mode = MatchMode::WordBoundary;
    }

    Ok(Analyzer::try_new(lexicon, analyzer_config)?)
}
