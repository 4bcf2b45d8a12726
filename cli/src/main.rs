//! monday - walk a monday.com account from the command line.
//!
//! ```bash
//! MONDAY_API_TOKEN=... monday
//! monday --board-id 123 --column-id link_col
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use monday_cli::{config, run, Cli, RunOptions, UreqTransport};
use monday_core::MondayClient;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            tracing::error!(error = %message, "Error fetching boards");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; the variables may come from the shell.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("loading .env");
        }
    }

    let config = config::from_env(cli.base_url.as_deref());
    let client = MondayClient::new(config, UreqTransport::new()).context("configuring client")?;

    let options = RunOptions {
        board_id: cli.board_id,
        column_id: cli.column_id,
    };
    let stdout = std::io::stdout();
    run(&client, &options, &mut stdout.lock())
}
