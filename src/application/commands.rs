use crate::domain::ports::DashboardFeed;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

/// A pass-through model action the UI can dispatch.
#[derive(Debug, Clone)]
pub enum ModelAction {
    Train,
    Approve { model_id: String },
    Revoke { model_id: String },
}

#[derive(Debug, Clone)]
pub struct ModelCommand {
    pub bot: String,
    pub action: ModelAction,
}

/// Executes queued model commands against the feed, one at a time.
pub struct CommandExecutor {
    feed: Arc<dyn DashboardFeed>,
}

impl CommandExecutor {
    pub fn new(feed: Arc<dyn DashboardFeed>) -> Self {
        Self { feed }
    }

    pub async fn run(
        self,
        mut commands: mpsc::Receiver<ModelCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(cmd) => self.dispatch(cmd).await,
                    None => break,
                },
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        debug!("CommandExecutor: shutdown");
                        break;
                    }
                }
            }
        }
    }

    async fn dispatch(&self, cmd: ModelCommand) {
        let result = match &cmd.action {
            ModelAction::Train => self.feed.trigger_training(&cmd.bot).await,
            ModelAction::Approve { model_id } => self.feed.approve_model(&cmd.bot, model_id).await,
            ModelAction::Revoke { model_id } => self.feed.revoke_model(&cmd.bot, model_id).await,
        };

        match result {
            Ok(()) => info!("Model action {:?} succeeded for {}", cmd.action, cmd.bot),
            Err(e) => error!("Model action {:?} failed for {}: {:#}", cmd.action, cmd.bot, e),
        }
    }
}
