//! `radius-studio`: drive the border-radius editor core from the terminal.
//!
//! Logs go to stderr through `tracing`; stdout carries only command output.

mod commands;
mod config;

use clap::Parser;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] radius::ParseError),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("expected {expected} comma-separated numbers, got `{value}`")]
    InvalidTuple { expected: usize, value: String },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = commands::Cli::parse();
    let config = commands::settings(&cli, config::StudioConfig::from_env()?);
    tracing::debug!(mode = %config.mode, unit = %config.unit, "studio configured");

    let output = commands::run(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}
