use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod profile;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

use self::commands::{Command, run_command};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordmark", about = "Annotate the English words you have not learned yet")]
struct Cli {
    /// JSON config file (defaults to ./wordmark.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

fn init_tracing(json: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs, &cli.log_level);

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config)?;

    if let Err(e) = run_command(&state, cli.command).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
