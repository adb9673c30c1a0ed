use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Playbill - finds performer names in calendar event descriptions
#[derive(Debug, Parser)]
#[command(name = "playbill")]
#[command(about = "Finds performer names in calendar event descriptions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log each inference stage at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Infer names from a single description
    Infer {
        /// Description text (reads --file or stdin when omitted)
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File holding the description, or '-' for stdin
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Annotate a JSON array of events with players and teams
    Events {
        /// JSON events file, or '-' for stdin
        #[arg(required = true)]
        source: PathBuf,

        /// Newline-separated team roster
        #[arg(long, env = "PLAYBILL_TEAMS_FILE")]
        teams: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Name dictionary CSV (first,last,full)
    #[arg(long, env = "PLAYBILL_NAMES_CSV")]
    pub names: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
