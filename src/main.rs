//! diamond-dash: a live diamond-cost dashboard.
//!
//! Run with:  `RUST_LOG=info diamond-dash [--config PATH] [--headless --ticks N]`

use anyhow::{Context, Result};
use clap::Parser;
use dash_config::DashConfig;
use dash_feed::{spawn_feed, LiveFeed};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "diamond-dash", version, about = "Live diamond-cost dashboard")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/diamond-dash/dash.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log snapshots to stdout instead of opening a window.
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks (headless only).
    #[arg(long, requires = "headless", value_parser = clap::value_parser!(u64).range(1..))]
    ticks: Option<u64>,
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("diamond-dash v{} starting", env!("CARGO_PKG_VERSION"));

    let path = cli.config.unwrap_or_else(dash_config::default_path);
    let config = dash_config::load(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if cli.headless {
        return run_headless(config, cli.ticks);
    }

    let dataset = dash_app::load_dataset(&config.filter).context("loading reference dataset")?;
    dash_app::run(config, dataset).map_err(Into::into)
}

/// Drive the feed on a single-threaded runtime and log every snapshot.
fn run_headless(config: DashConfig, ticks: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building tokio runtime")?;

    runtime.block_on(async move {
        let feed = LiveFeed::from_config(&config.feed);
        let (mut rx, handle) = spawn_feed(feed, config.feed.interval());

        let mut seen = 0u64;
        while rx.changed().await.is_ok() {
            let Some(snap) = rx.borrow_and_update().clone() else {
                continue;
            };
            seen += 1;

            let trend = snap.trend().map(|fit| fit.slope).unwrap_or_default();
            info!(
                tick = seen,
                cost = snap.latest.cost(),
                timestamp = snap.latest.timestamp(),
                buffered = snap.readings.len(),
                slope = trend,
                "Snapshot"
            );

            if ticks.is_some_and(|limit| seen >= limit) {
                break;
            }
        }

        // Dropping the last receiver stops the feed task.
        drop(rx);
        handle.await.context("feed task panicked")
    })
}
