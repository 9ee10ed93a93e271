use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::traits::wallet_provider::WalletProvider;

/// Phantom-flavoured provider backed by a fixed address.
///
/// Stands in for the browser-injected wallet when running headless. It
/// never signs anything; connecting just reveals the configured address.
pub struct StaticWalletProvider {
    address: String,
    connected: AtomicBool,
}

impl StaticWalletProvider {
    /// Create a provider that starts disconnected
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connected: AtomicBool::new(false),
        }
    }

    /// Create a provider that reports an existing connection
    pub fn preconnected(address: impl Into<String>) -> Self {
        let provider = Self::new(address);
        provider.connected.store(true, Ordering::SeqCst);
        provider
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    fn is_phantom(&self) -> bool {
        true
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn public_key(&self) -> Option<String> {
        self.is_connected().then(|| self.address.clone())
    }

    async fn connect(&self) -> anyhow::Result<String> {
        if self.address.is_empty() {
            anyhow::bail!("no account configured");
        }
        self.connected.store(true, Ordering::SeqCst);
        info!("Static wallet approved connection");
        Ok(self.address.clone())
    }

    async fn disconnect(&self) -> anyhow::Result<()> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exposes_key_only_while_connected() {
        let wallet = StaticWalletProvider::new("Abc123");
        assert!(!wallet.is_connected());
        assert_eq!(wallet.public_key(), None);

        assert_eq!(wallet.connect().await.unwrap(), "Abc123");
        assert_eq!(wallet.public_key().as_deref(), Some("Abc123"));

        wallet.disconnect().await.unwrap();
        assert!(!wallet.is_connected());
    }

    #[tokio::test]
    async fn empty_account_rejects_connect() {
        let wallet = StaticWalletProvider::new("");
        assert!(wallet.connect().await.is_err());
        assert!(!wallet.is_connected());
    }

    #[test]
    fn preconnected_reports_connection() {
        let wallet = StaticWalletProvider::preconnected("Abc123");
        assert!(wallet.is_phantom());
        assert!(wallet.is_connected());
    }
}
