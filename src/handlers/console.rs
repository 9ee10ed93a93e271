use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{SessionSnapshot, StatusMessage};
use crate::traits::event_handler::SessionEventHandler;
use crate::utils::helper::format_address;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionEventHandler for ConsoleEventHandler {
    async fn on_status_changed(&self, status: &StatusMessage) {
        if status.is_empty() {
            info!("Status cleared");
            return;
        }
        match status.auto_expire {
            Some(ttl) => info!(
                "Status [{}]: {} (clears in {}ms)",
                status.set_at.format("%H:%M:%S"),
                status.text,
                ttl.as_millis()
            ),
            None => info!("Status [{}]: {}", status.set_at.format("%H:%M:%S"), status.text),
        }
    }

    async fn on_session_changed(&self, snapshot: &SessionSnapshot) {
        let address = snapshot.session.address_str();
        info!(
            "Session {} | wallet: {} | balance: {} SOL | generation {}",
            snapshot.state,
            if address.is_empty() { "-".to_string() } else { format_address(address) },
            snapshot.balance.display(),
            snapshot.generation
        );
    }

    async fn on_blocking_notice(&self, notice: &str) {
        warn!("{}", "!".repeat(80));
        warn!("{}", notice);
        warn!("{}", "!".repeat(80));
    }
}
