//! `matchup`: read battle calculation requests as JSON, write responses as JSON.
//!
//! Input comes from a file (positional argument or `MATCHUP_INPUT`) or stdin.
//! Responses go to stdout, logs to stderr.

mod config;
mod runner;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use matchup_battle::BattleEngine;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::{CliConfig, InputMode};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?.with_input_arg(std::env::args().nth(1));
    setup_logging(&config.log_directive)?;

    info!(
        mode = ?config.mode,
        workers = config.workers,
        input = ?config.input,
        "Starting matchup"
    );

    let input = read_input(config.input.as_deref()).await?;
    let engine = BattleEngine::new();

    let replies = match config.mode {
        InputMode::Single => vec![runner::respond(engine, &input)],
        InputMode::Lines => runner::run_lines(engine, &input, config.workers).await?,
    };

    let mut stdout = std::io::stdout().lock();
    for reply in &replies {
        writeln!(stdout, "{}", reply.to_json(config.pretty)?).context("Failed to write output")?;
    }
    stdout.flush().context("Failed to flush output")?;

    if config.mode == InputMode::Single && replies.iter().any(|r| r.is_error()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn setup_logging(default_directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .with_context(|| format!("Invalid log directive: {default_directive}"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
