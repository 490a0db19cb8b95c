/*
[INPUT]:  CLI arguments, environment (.env supported), OS shutdown signals
[OUTPUT]: Result of one River Platform operation printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

mod commands;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use river_platform_client::{Cancellation, PlatformClient, PlatformConfig};

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "river-platform", version, about = "River Platform API client")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Compact JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = PlatformConfig::from_env().context("load configuration from environment")?;
    info!(base_url = %config.base_url, account_id = %config.account_id, "configuration loaded");

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let client = PlatformClient::from_config(&config, Some(Cancellation::from_token(shutdown)))
        .context("build platform client")?;

    let output = commands::run(&client, args.command).await?;
    let rendered = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("render output")?;
    println!("{rendered}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
