//! Botwatch Monitor - headless fleet watcher
//!
//! Runs the polling layer without a GUI and periodically writes one status
//! line per bot to stdout. Suitable for terminals and cron-adjacent checks.
//!
//! # Usage
//! ```sh
//! MODE=mock cargo run --bin monitor --no-default-features -- --interval 30
//! ```

use anyhow::Result;
use botwatch::application::system::Application;
use botwatch::config::Config;
use clap::Parser;
use std::time::Duration;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "monitor", about = "Headless trading-bot fleet watcher")]
struct Args {
    /// Seconds between status reports
    #[arg(long, default_value_t = 30)]
    interval: u64,

    /// Print a single report after the first refresh, then exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Botwatch Monitor {} starting...", env!("CARGO_PKG_VERSION"));
    info!("Mode: HEADLESS (no UI)");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Mode={:?}, Bots={:?}",
        config.mode, config.bots
    );

    let fast_refresh = config.fast_refresh_secs;
    let app = Application::build(config).await?;
    let handle = app.start().await?;

    if args.once {
        // Give both cadences a moment to complete their initial fetch.
        tokio::time::sleep(Duration::from_secs(fast_refresh.min(3))).await;
        report(&handle).await;
        handle.shutdown();
        return Ok(());
    }

    info!(
        "Monitor running (report every {}s). Press Ctrl+C to shutdown.",
        args.interval
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));
    ticker.tick().await; // first tick is immediate; skip it

    loop {
        tokio::select! {
            _ = ticker.tick() => report(&handle).await,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received. Exiting...");
                handle.shutdown();
                break;
            }
        }
    }

    Ok(())
}

async fn report(handle: &botwatch::application::system::MonitorHandle) {
    let snap = handle.snapshot.read().await;

    for (bot, data) in &snap.bots {
        let equity = data.summary.as_ref().map(|s| s.equity).unwrap_or(0.0);
        let daily = data.summary.as_ref().map(|s| s.daily_pnl).unwrap_or(0.0);
        let (wins, losses) = data.win_loss_days();

        info!(
            "{}: equity=${:.2} daily=${:+.2} max_dd={:.2}% positions={} heatmap_days={} win/loss={}/{}",
            bot,
            equity,
            daily,
            data.max_drawdown(),
            data.positions.len(),
            data.heatmap.len(),
            wins,
            losses
        );

        if let Some(err) = &data.last_error {
            warn!("{}: last refresh error: {}", bot, err);
        }
    }

    if snap.bots.is_empty() {
        info!("No data yet (first refresh pending).");
    }
}
