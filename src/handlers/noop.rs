use async_trait::async_trait;

use crate::models::{SessionSnapshot, StatusMessage};
use crate::traits::event_handler::SessionEventHandler;

/// Handler that drops every event; for headless use and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventHandler;

#[async_trait]
impl SessionEventHandler for NoopEventHandler {
    async fn on_status_changed(&self, _status: &StatusMessage) {}

    async fn on_session_changed(&self, _snapshot: &SessionSnapshot) {}
}
