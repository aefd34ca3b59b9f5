use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::store::Store;

/// Centralized channel management
pub struct ChannelSet {
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            ui_to_app: kanal::bounded_async(64), // UI interactions
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    store: Arc<Store>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            channels: ChannelSet::new(),
            store,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender handed to the rendering layer
    pub fn sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.store.clone(),
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
