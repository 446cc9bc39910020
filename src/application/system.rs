//! Wires config, feed, pollers, and the command executor together.

use crate::application::commands::{CommandExecutor, ModelCommand};
use crate::application::poller::{Cadence, FeedPoller};
use crate::application::snapshot::{DashboardSnapshot, SharedSnapshot};
use crate::config::{Config, Mode};
use crate::domain::errors::CommandError;
use crate::domain::ports::DashboardFeed;
use crate::infrastructure::{MockFeed, RestFeed};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, mpsc, watch};
use tracing::info;

pub struct Application {
    config: Config,
    feed: Arc<dyn DashboardFeed>,
}

/// Handle over the running monitor: snapshot reads, command dispatch, and
/// shutdown. Dropping the handle does not stop the tasks; call [`shutdown`].
///
/// [`shutdown`]: MonitorHandle::shutdown
#[derive(Clone)]
pub struct MonitorHandle {
    pub snapshot: SharedSnapshot,
    pub bots: Vec<String>,
    command_tx: mpsc::Sender<ModelCommand>,
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl MonitorHandle {
    pub fn send_command(&self, cmd: ModelCommand) -> Result<()> {
        let bot = cmd.bot.clone();
        self.command_tx
            .try_send(cmd)
            .map_err(|_| CommandError::QueueFull { bot }.into())
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Application {
    pub async fn build(config: Config) -> Result<Self> {
        let feed: Arc<dyn DashboardFeed> = match config.mode {
            Mode::Mock => {
                info!("Data source: mock feed ({} bots)", config.bots.len());
                Arc::new(MockFeed::new(&config.bots, config.starting_capital))
            }
            Mode::Rest => {
                info!("Data source: REST API at {}", config.api_base_url);
                Arc::new(RestFeed::new(
                    config.api_base_url.clone(),
                    config.api_key.clone(),
                    Duration::from_secs(config.http_timeout_secs),
                ))
            }
        };

        Ok(Self { config, feed })
    }

    /// Spawn one poller per (bot, cadence) plus the command executor, and
    /// hand back the monitor handle.
    pub async fn start(&self) -> Result<MonitorHandle> {
        let snapshot: SharedSnapshot = Arc::new(RwLock::new(DashboardSnapshot::default()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (command_tx, command_rx) = mpsc::channel(16);

        let cadences = [
            (Cadence::Fast, self.config.fast_refresh_secs),
            (Cadence::Slow, self.config.slow_refresh_secs),
        ];

        for bot in &self.config.bots {
            for (cadence, secs) in cadences {
                let poller = FeedPoller::new(
                    self.feed.clone(),
                    snapshot.clone(),
                    self.config.starting_capital,
                    self.config.log_tail_limit,
                );
                tokio::spawn(poller.run(
                    bot.clone(),
                    cadence,
                    Duration::from_secs(secs),
                    shutdown_rx.clone(),
                ));
            }
        }

        let executor = CommandExecutor::new(self.feed.clone());
        tokio::spawn(executor.run(command_rx, shutdown_rx));

        info!(
            "Monitor started: {} bots, fast={}s slow={}s",
            self.config.bots.len(),
            self.config.fast_refresh_secs,
            self.config.slow_refresh_secs
        );

        Ok(MonitorHandle {
            snapshot,
            bots: self.config.bots.clone(),
            command_tx,
            shutdown_tx: Arc::new(shutdown_tx),
        })
    }
}
