//! # Revizor — homework-review status watcher
//!
//! Polls the homework review API on a fixed interval and reports verdict
//! changes to a Telegram chat.
//!
//! Usage:
//!   revizor                          # Watch with config from ~/.revizor/config.toml + env
//!   revizor --interval 60            # Custom polling interval
//!   revizor --once                   # Single tick, then exit (deployment smoke test)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use revizor_api::ReviewApiClient;
use revizor_channels::TelegramChannel;
use revizor_core::RevizorConfig;
use revizor_watcher::Watcher;

#[derive(Parser)]
#[command(
    name = "revizor",
    version,
    about = "Homework-review status watcher — polls the review API and reports verdicts to Telegram"
)]
struct Cli {
    /// Path to config file (default: ~/.revizor/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Polling interval in seconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Run exactly one tick and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "revizor=debug,revizor_watcher=debug,revizor_api=debug,revizor_channels=debug"
    } else {
        "revizor=info,revizor_watcher=info,revizor_api=info,revizor_channels=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => {
            let path = shellexpand::tilde(path).to_string();
            RevizorConfig::load_from(std::path::Path::new(&path))?
        }
        None => RevizorConfig::load()?,
    };
    if let Some(interval) = cli.interval {
        config.poll_interval = interval;
    }

    // Credential preflight — fatal before the loop ever starts.
    config.validate()?;
    tracing::info!("credentials present, watching {}", config.api_url);

    let source = ReviewApiClient::from_config(&config);
    let channel = TelegramChannel::new(&config.telegram_token, &config.telegram_chat_id);

    // Connectivity check is informational: a flaky Telegram moment at boot
    // must not kill a watcher that would recover on the next tick.
    if let Err(e) = channel.connect().await {
        tracing::warn!("Telegram connectivity check failed: {e}");
    }

    let mut watcher = Watcher::new(source, channel, config.poll_interval);

    if cli.once {
        watcher.run_tick().await;
        return Ok(());
    }

    watcher.run().await;
    Ok(())
}
