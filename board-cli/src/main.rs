use std::process::ExitCode;

use board_cli::cli::Cli;
use board_cli::commands::Commands;
use board_cli::{Client, logger, project_commands, task_commands, user_commands};

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match board_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(config.logging.level, config.logging.colored) {
        eprintln!("Error initializing logger: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    // Endpoint resolution: explicit flag > configuration (file or env)
    let endpoint = cli
        .endpoint
        .unwrap_or_else(|| config.api.endpoint.clone());
    let client = Client::new(&endpoint);

    match cli.command {
        Commands::User { action } => user_commands::run(&client, action, cli.pretty).await,
        Commands::Project { action } => project_commands::run(&client, action, cli.pretty).await,
        Commands::Task { action } => task_commands::run(&client, action, cli.pretty).await,
    }
}
