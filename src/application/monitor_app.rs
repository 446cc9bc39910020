use crate::application::client::MonitorClient;
use crate::application::commands::{ModelAction, ModelCommand};
use crate::application::snapshot::BotSnapshot;
use tracing::warn;

/// Which central view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    Overview,
    Analytics,
    Positions,
    Models,
}

/// UI state container. Holds no egui types so it compiles headless; the
/// `eframe::App` impl lives in `interfaces::ui`.
pub struct MonitorApp {
    pub client: MonitorClient,
    pub selected_bot: String,
    pub active_view: ViewTab,
    pub log_lines: Vec<String>,

    // None = all levels
    pub log_level_filter: Option<String>,
}

impl MonitorApp {
    pub fn new(client: MonitorClient) -> Self {
        let selected_bot = client.bots().first().cloned().unwrap_or_default();
        Self {
            client,
            selected_bot,
            active_view: ViewTab::Overview,
            log_lines: Vec::new(),
            log_level_filter: None,
        }
    }

    /// Drain mirrored tracing output; called once per frame.
    pub fn update(&mut self) {
        self.client.drain_logs(&mut self.log_lines);

        // Keep the scrollback bounded.
        if self.log_lines.len() > 1000 {
            self.log_lines.drain(0..100);
        }
    }

    pub fn selected_snapshot(&self) -> Option<BotSnapshot> {
        self.client.snapshot_of(&self.selected_bot)
    }

    pub fn send_model_action(&mut self, action: ModelAction) {
        let cmd = ModelCommand {
            bot: self.selected_bot.clone(),
            action,
        };
        if let Err(e) = self.client.send_command(cmd) {
            warn!("Dropped model action: {:#}", e);
        }
    }
}
