#![deny(clippy::unwrap_used)]

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod cli_args;
mod output;
mod settings;

use crate::cli_args::Cli;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("failed to initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    let on_error = cli.on_error;
    let result = match Settings::resolve(&cli) {
        Ok(settings) => bootstrap::run(&settings).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(report) => {
            tracing::debug!(
                event = "bootstrap_completed",
                user_id = report.created.id,
                total_users = report.users.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let error = format!("{err:#}");
            tracing::error!(
                event = "bootstrap_failed",
                error = %error,
                on_error = ?on_error
            );
            on_error.exit_code()
        }
    }
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)?,
        _ => EnvFilter::try_new(filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
