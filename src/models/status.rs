use std::time::Duration;

use chrono::{DateTime, Utc};

/// The single status line shown under the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub auto_expire: Option<Duration>,
    pub set_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, auto_expire: Option<Duration>) -> Self {
        Self {
            text: text.into(),
            auto_expire,
            set_at: Utc::now(),
        }
    }

    /// Blank status line
    pub fn empty() -> Self {
        Self::new(String::new(), None)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::empty()
    }
}
