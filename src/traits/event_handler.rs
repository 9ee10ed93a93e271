use async_trait::async_trait;

use crate::models::{SessionSnapshot, StatusMessage};

/// Observer for everything the view would repaint on
#[async_trait]
pub trait SessionEventHandler: Send + Sync {
    /// The status line changed (including being cleared by expiry)
    async fn on_status_changed(&self, status: &StatusMessage);

    /// Address, balance or connection state changed
    async fn on_session_changed(&self, snapshot: &SessionSnapshot);

    /// Modal notice the user must acknowledge, separate from the status line
    async fn on_blocking_notice(&self, notice: &str) {
        let _ = notice;
    }
}
