mod cli;
mod commands;

use std::process;

use clap::Parser;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

pub const TRACING_TARGET_STARTUP: &str = "pcli::startup";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command,
        "starting parsely"
    );

    if let Err(error) = run(cli) {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %format!("{error:#}"),
            "command failed"
        );
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        tracing::info!(target: TRACING_TARGET_STARTUP, "no command given");
        return Ok(());
    };

    let output = match command {
        Command::Extract { input } => commands::extract(&commands::read_input(&input)?)?,
        Command::Check { input } => commands::check(&commands::read_input(&input)?)?,
    };
    print_json(&output)
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Installs a stderr fmt subscriber; `RUST_LOG` takes precedence over `level`.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
