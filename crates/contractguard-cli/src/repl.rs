//! Interactive clause browser.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use contractguard_analyzer::Analysis;
use contractguard_domain::{AnalysisRecord, Navigator, TierFilter};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Browser state: one analysis, the active filter and the position within it.
#[derive(Debug)]
pub struct BrowserSession {
    analysis: Analysis,
    filter: TierFilter,
    navigator: Navigator,
}

impl BrowserSession {
    /// Start browsing `analysis` with `filter` applied, at the first clause.
    pub fn new(analysis: Analysis, filter: TierFilter) -> Self {
        let len = analysis.filter(filter).len();
        Self {
            analysis,
            filter,
            navigator: Navigator::new(len),
        }
    }

    /// Records passing the active filter, in document order.
    pub fn visible(&self) -> Vec<&AnalysisRecord> {
        self.analysis.filter(self.filter)
    }

    /// The record under the cursor, if any clause passes the filter.
    pub fn current(&self) -> Option<&AnalysisRecord> {
        self.visible().get(self.navigator.current()).copied()
    }

    /// The active filter.
    pub fn filter(&self) -> TierFilter {
        self.filter
    }

    /// The cursor.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The analysis being browsed.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Change the filter, keeping the cursor index and clamping it to the
    /// new list.
    pub fn set_filter(&mut self, filter: TierFilter) {
        self.filter = filter;
        let len = self.analysis.filter(filter).len();
        self.navigator.resize(len);
    }

    /// Apply a navigation command. Returns `false` for commands the session
    /// does not handle (help, show, exit).
    pub fn apply(&mut self, command: &BrowseCommand) -> bool {
        match command {
            BrowseCommand::Next => {
                self.navigator.next();
            }
            BrowseCommand::Previous => {
                self.navigator.previous();
            }
            BrowseCommand::First => {
                self.navigator.jump(0);
            }
            BrowseCommand::Last => {
                self.navigator.jump(usize::MAX);
            }
            BrowseCommand::Goto(position) => {
                self.navigator.jump(position.saturating_sub(1));
            }
            BrowseCommand::Filter(filter) => self.set_filter(*filter),
            BrowseCommand::Show | BrowseCommand::Counts | BrowseCommand::Help | BrowseCommand::Exit => {
                return false;
            }
        }
        true
    }
}

/// A browser command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    First,
    Last,
    /// 1-based clause position within the filtered list
    Goto(usize),
    Filter(TierFilter),
    Show,
    Counts,
    Help,
    Exit,
}

/// Parse a browser command line.
pub fn parse_browse_command(line: &str) -> Result<BrowseCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(BrowseCommand::Next);
    }

    match parts[0].to_lowercase().as_str() {
        "n" | "next" => Ok(BrowseCommand::Next),
        "p" | "prev" | "previous" => Ok(BrowseCommand::Previous),
        "first" => Ok(BrowseCommand::First),
        "last" => Ok(BrowseCommand::Last),
        "g" | "goto" => {
            let position = parts
                .get(1)
                .ok_or_else(|| CliError::InvalidInput("Usage: goto <clause number>".to_string()))?;
            position
                .parse::<usize>()
                .map(BrowseCommand::Goto)
                .map_err(|_| CliError::InvalidInput(format!("Invalid clause number: {}", position)))
        }
        "f" | "filter" => {
            let level = parts.get(1).ok_or_else(|| {
                CliError::InvalidInput("Usage: filter <all|high|medium|low|none>".to_string())
            })?;
            TierFilter::parse(level)
                .map(BrowseCommand::Filter)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown risk level: {}", level)))
        }
        "s" | "show" => Ok(BrowseCommand::Show),
        "c" | "counts" => Ok(BrowseCommand::Counts),
        "help" | "?" => Ok(BrowseCommand::Help),
        "exit" | "quit" | "q" => Ok(BrowseCommand::Exit),
        other => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            other
        ))),
    }
}

/// Run the interactive browser over `session`.
pub fn run_browser(
    session: &mut BrowserSession,
    source: &str,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Browsing {} - Type 'help' for commands, 'exit' to quit",
            source
        ))
    );
    println!("{}", formatter.format_counts(&session.analysis().tier_counts()));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Readline(e.to_string()))?
        .build();
    let mut editor =
        DefaultEditor::with_config(editor_config).map_err(|e| CliError::Readline(e.to_string()))?;

    let history_path = Config::history_path().ok();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    print_current(session, formatter);

    loop {
        match editor.readline("clause> ") {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    editor.add_history_entry(line).ok();
                }

                match parse_browse_command(line) {
                    Ok(BrowseCommand::Exit) => break,
                    Ok(BrowseCommand::Help) => print_help(formatter),
                    Ok(BrowseCommand::Counts) => {
                        println!("{}", formatter.format_counts(&session.analysis().tier_counts()));
                    }
                    Ok(BrowseCommand::Show) => print_current(session, formatter),
                    Ok(command) => {
                        session.apply(&command);
                        print_current(session, formatter);
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        editor.save_history(path).ok();
    }

    Ok(())
}

fn print_current(session: &BrowserSession, formatter: &Formatter) {
    println!(
        "{}",
        formatter.format_clause_view(session.current(), session.navigator(), session.filter())
    );
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!("  n, next                 Next clause (also: empty line)");
    println!("  p, prev                 Previous clause");
    println!("  first, last             Jump to the first or last clause");
    println!("  g, goto <n>             Jump to clause n of the filtered list");
    println!("  f, filter <level>       Show only all|high|medium|low|none");
    println!("  s, show                 Show the current clause again");
    println!("  c, counts               Show clause counts per risk level");
    println!("  help, ?                 Show this help");
    println!("  exit, quit, q           Leave the browser");
}
