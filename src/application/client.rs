use crate::application::commands::ModelCommand;
use crate::application::snapshot::BotSnapshot;
use crate::application::system::MonitorHandle;
use anyhow::Result;
use crossbeam_channel::Receiver;

/// Synchronous façade the UI thread talks to.
///
/// Snapshot reads are non-blocking (`try_read`); when the pollers hold the
/// write lock the UI simply renders the previous frame's data.
pub struct MonitorClient {
    handle: MonitorHandle,
    log_rx: Receiver<String>,
}

impl MonitorClient {
    pub fn new(handle: MonitorHandle, log_rx: Receiver<String>) -> Self {
        Self { handle, log_rx }
    }

    pub fn bots(&self) -> &[String] {
        &self.handle.bots
    }

    /// Clone of the latest snapshot for one bot, or None while data is still
    /// loading (or the lock is briefly held by a poller).
    pub fn snapshot_of(&self, bot: &str) -> Option<BotSnapshot> {
        let snap = self.handle.snapshot.try_read().ok()?;
        snap.bots.get(bot).cloned()
    }

    pub fn send_command(&self, cmd: ModelCommand) -> Result<()> {
        self.handle.send_command(cmd)
    }

    /// Drain any log lines mirrored from the tracing subscriber.
    pub fn drain_logs(&self, into: &mut Vec<String>) {
        while let Ok(line) = self.log_rx.try_recv() {
            into.push(line);
        }
    }

    pub fn shutdown(&self) {
        self.handle.shutdown();
    }
}
