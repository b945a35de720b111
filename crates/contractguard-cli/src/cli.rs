//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use contractguard_domain::{RiskTier, TierFilter};
use std::path::PathBuf;

/// ContractGuard - Flag risky clauses in contracts.
#[derive(Debug, Parser)]
#[command(name = "contractguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONTRACTGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per clause)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one or more contracts
    Analyze(AnalyzeArgs),

    /// Browse the clauses of a contract interactively
    Browse(BrowseArgs),

    /// Inspect the keyword lexicon
    Lexicon(LexiconArgs),

    /// Inspect the CLI configuration
    Config(ConfigArgs),
}

/// Lexicon and matching options shared by commands that analyze text.
#[derive(Debug, Clone, Default, Args)]
pub struct LexiconOpts {
    /// Lexicon TOML file (overrides the configured lexicon)
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Only match keywords as whole words
    #[arg(long)]
    pub word_boundary: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Contract files (.txt, .pdf, .docx)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show clauses with this risk level
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,

    #[command(flatten)]
    pub lexicon: LexiconOpts,
}

/// Arguments for the browse command.
#[derive(Debug, Parser)]
pub struct BrowseArgs {
    /// Contract file (.txt, .pdf, .docx)
    pub file: PathBuf,

    /// Initial risk level filter
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,

    #[command(flatten)]
    pub lexicon: LexiconOpts,
}

/// Arguments for the lexicon command.
#[derive(Debug, Parser)]
pub struct LexiconArgs {
    #[command(subcommand)]
    pub action: LexiconAction,

    /// Lexicon TOML file (overrides the configured lexicon)
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Only match keywords as whole words
    #[arg(long, global = true)]
    pub word_boundary: bool,
}

/// Lexicon actions.
#[derive(Debug, Subcommand)]
pub enum LexiconAction {
    /// Print the active lexicon by tier
    Show,

    /// Print the active lexicon as TOML
    Export,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Risk level filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterArg {
    /// Every clause
    All,
    /// High risk clauses
    High,
    /// Medium risk clauses
    Medium,
    /// Low risk clauses
    Low,
    /// Unflagged clauses
    None,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<FilterArg> for TierFilter {
    fn from(filter: FilterArg) -> Self {
        match filter {
            FilterArg::All => TierFilter::All,
            FilterArg::High => TierFilter::Tier(RiskTier::High),
            FilterArg::Medium => TierFilter::Tier(RiskTier::Medium),
            FilterArg::Low => TierFilter::Tier(RiskTier::Low),
            FilterArg::None => TierFilter::Tier(RiskTier::None),
        }
    }
}
