use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "board")]
#[command(about = "Command-line client for the taskboard project management API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API endpoint (overrides the configured base URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
