use std::sync::Arc;
use std::time::Duration;

use lexi_types::{Notification, Severity};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Transient notification with a fixed auto-dismiss delay.
///
/// Newest-wins: a new notification aborts the pending dismissal timer
/// before arming its own, so there is never more than one live timer.
/// No queueing.
pub struct Notifier {
    state: Arc<RwLock<Notification>>,
    timeout: Duration,
    dismissal: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(Notification::default())),
            timeout,
            dismissal: Mutex::new(None),
        }
    }

    pub async fn notify(&self, message: impl Into<String>, severity: Severity) {
        let mut dismissal = self.dismissal.lock().await;
        if let Some(timer) = dismissal.take() {
            timer.abort();
        }

        {
            let mut notification = self.state.write().await;
            notification.message = message.into();
            notification.severity = severity;
            notification.visible = true;
        }

        let state = Arc::clone(&self.state);
        let timeout = self.timeout;
        *dismissal = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            state.write().await.visible = false;
        }));
    }

    pub async fn current(&self) -> Notification {
        self.state.read().await.clone()
    }
}
