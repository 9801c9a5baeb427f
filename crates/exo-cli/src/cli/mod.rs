//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use exo_core::config::Config;
use tracing_subscriber::EnvFilter;

use crate::modes;

#[derive(Parser)]
#[command(name = "exo")]
#[command(version = "0.1")]
#[command(about = "ExoExplorer account flow")]
struct Cli {
    /// Path to a config file (default: ${EXO_HOME}/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the screen output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path).context("load config")?,
        None => Config::load().context("load config")?,
    };
    tracing::debug!("config loaded");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { modes::interactive::run(&config).await })
}
