use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "imprint",
    version,
    about = "Score self-report screening instruments"
)]
pub struct Cli {
    /// Scoring config file (falls back to $IMPRINT_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available instruments
    List,
    /// Print an instrument's full definition
    Show(ShowCommand),
    /// Score a response file
    Score(ScoreCommand),
    /// Run only the safety screen on a response file
    Safety(SafetyCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
pub struct ShowCommand {
    pub instrument: String,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub instrument: String,
    /// JSON object of question id → answer
    #[arg(long)]
    pub responses: PathBuf,
    /// Second rater's responses, for dual-rater instruments
    #[arg(long)]
    pub second_rater: Option<PathBuf>,
    /// Refuse to score unless every question is answered
    #[arg(long)]
    pub require_complete: bool,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct SafetyCommand {
    pub instrument: String,
    #[arg(long)]
    pub responses: PathBuf,
}
