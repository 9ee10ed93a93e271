use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::traits::clipboard::Clipboard;

/// Clipboard that keeps the last written text in memory
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        *self.contents.lock().await = Some(text.to_string());
        Ok(())
    }
}
