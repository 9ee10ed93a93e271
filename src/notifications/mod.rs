//! Status line with optional self-expiry.
//!
//! One message at a time, last write wins. A message written with an
//! expiry schedules a clear; any later write cancels that clear before
//! installing its own (if it has one).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::StatusMessage;
use crate::traits::event_handler::SessionEventHandler;

struct StatusSlot {
    message: StatusMessage,
    /// Bumped on every write; an expiry only clears the revision it was scheduled for
    revision: u64,
    expiry: Option<JoinHandle<()>>,
}

/// Owner of the status line
#[derive(Clone)]
pub struct StatusNotifier {
    slot: Arc<Mutex<StatusSlot>>,
    handler: Arc<dyn SessionEventHandler>,
}

impl StatusNotifier {
    /// Create a notifier that reports every change to `handler`
    pub fn new(handler: Arc<dyn SessionEventHandler>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(StatusSlot {
                message: StatusMessage::empty(),
                revision: 0,
                expiry: None,
            })),
            handler,
        }
    }

    /// Replace the status line, optionally clearing it after `auto_expire`
    pub async fn set_status(&self, text: impl Into<String>, auto_expire: Option<Duration>) {
        let message = StatusMessage::new(text, auto_expire);
        {
            let mut slot = self.slot.lock().await;
            if let Some(pending) = slot.expiry.take() {
                pending.abort();
                debug!("Superseded pending status expiry (revision {})", slot.revision);
            }
            slot.revision += 1;
            slot.message = message.clone();

            if let Some(ttl) = auto_expire {
                let revision = slot.revision;
                slot.expiry = Some(tokio::spawn(Self::expire_after(
                    self.slot.clone(),
                    self.handler.clone(),
                    revision,
                    ttl,
                )));
            }
        }
        self.handler.on_status_changed(&message).await;
    }

    /// Blank the status line
    pub async fn clear(&self) {
        self.set_status(String::new(), None).await;
    }

    /// Current message
    pub async fn current(&self) -> StatusMessage {
        self.slot.lock().await.message.clone()
    }

    /// Current message text
    pub async fn text(&self) -> String {
        self.slot.lock().await.message.text.clone()
    }

    async fn expire_after(
        slot: Arc<Mutex<StatusSlot>>,
        handler: Arc<dyn SessionEventHandler>,
        revision: u64,
        ttl: Duration,
    ) {
        tokio::time::sleep(ttl).await;

        let cleared = {
            let mut slot = slot.lock().await;
            if slot.revision != revision {
                debug!("Status expiry for revision {} is stale, skipping", revision);
                return;
            }
            slot.revision += 1;
            slot.message = StatusMessage::empty();
            slot.expiry = None;
            slot.message.clone()
        };
        handler.on_status_changed(&cleared).await;
    }
}
