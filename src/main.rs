mod cli;
mod client;
mod commands;
mod config;
mod controller;
mod error;
mod form;
mod output;
mod prompt;
#[cfg(test)]
mod test_support;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::TeamsClient;
use config::Config;
use controller::TeamsController;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Logs go to stderr; RUST_LOG overrides the level picked by --verbose
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't talk to the API
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "teams", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        command => {
            let config = Config::load()?;
            let base_url = config.base_url(cli.base_url.as_deref())?;
            let client = TeamsClient::new(&base_url);
            tracing::debug!(endpoint = client.endpoint(), "using teams endpoint");

            let mut controller =
                TeamsController::new(client).surface_list_errors(config.surface_list_errors());

            match command {
                Commands::List => commands::teams::list(&mut controller).await?,
                Commands::Show { id } => commands::teams::show(&mut controller, id).await?,
                Commands::Add(args) => commands::teams::add(&mut controller, args).await?,
                Commands::Edit(args) => commands::teams::edit(&mut controller, args).await?,
                Commands::Delete { id, yes } => {
                    commands::teams::delete(&mut controller, id, yes).await?
                }
                Commands::Shell => commands::shell::run(&mut controller).await?,
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
