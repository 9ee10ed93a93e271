use async_trait::async_trait;

/// System clipboard (write-only from our side)
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}
