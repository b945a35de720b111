//! Browse command implementation.

use crate::cli::BrowseArgs;
use crate::commands::{analyze_file, build_analyzer, empty_document_warning};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::repl::{run_browser, BrowserSession};
use contractguard_extractor::ExtractorRegistry;

/// Execute the browse command.
pub fn execute_browse(args: BrowseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let analyzer = build_analyzer(config, &args.lexicon)?;
    let registry = ExtractorRegistry::with_defaults();

    let Some(document) = analyze_file(&registry, &analyzer, &args.file)? else {
        eprintln!("{}", empty_document_warning(formatter, &args.file));
        return Ok(());
    };

    let mut session = BrowserSession::new(document.analysis, args.filter.into());
    run_browser(&mut session, &document.source, config, formatter)
}
