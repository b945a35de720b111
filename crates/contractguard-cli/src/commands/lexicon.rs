//! Lexicon command implementation.

use crate::cli::{LexiconAction, LexiconArgs, LexiconOpts};
use crate::commands::build_analyzer;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use contractguard_analyzer::{lexicon_to_toml, Analyzer};

/// Execute the lexicon command.
pub fn execute_lexicon(args: LexiconArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let opts = LexiconOpts {
        lexicon: args.lexicon,
        word_boundary: args.word_boundary,
    };
    let analyzer = build_analyzer(config, &opts)?;

    match args.action {
        LexiconAction::Show => println!("{}", render_lexicon(&analyzer, formatter)?),
        LexiconAction::Export => print!("{}", lexicon_to_toml(analyzer.classifier().lexicon())?),
    }

    Ok(())
}

/// Render the analyzer's lexicon; tables are headed by the match mode.
pub fn render_lexicon(analyzer: &Analyzer, formatter: &Formatter) -> Result<String> {
    let classifier = analyzer.classifier();
    let body = formatter.format_lexicon(classifier.lexicon())?;

    if formatter.format() != OutputFormat::Table {
        return Ok(body);
    }
    Ok(format!(
        "{}\n{}",
        formatter.info(&format!("Match mode: {}", classifier.match_mode())),
        body
    ))
}
