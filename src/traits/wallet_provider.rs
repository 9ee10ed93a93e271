use std::sync::Arc;

use async_trait::async_trait;

/// Injected wallet capability (Phantom-style provider object).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether the injected object identifies itself as Phantom
    fn is_phantom(&self) -> bool;

    /// Provider-side connection flag
    fn is_connected(&self) -> bool;

    /// Public key of the connected account, if the provider exposes one
    fn public_key(&self) -> Option<String>;

    /// Ask the user to connect; resolves to the account's public key
    async fn connect(&self) -> anyhow::Result<String>;

    /// Drop the provider-side connection
    async fn disconnect(&self) -> anyhow::Result<()>;

    /// Some providers do not expose `disconnect` at all
    fn supports_disconnect(&self) -> bool {
        true
    }
}

/// Wallet provider as detected at startup.
#[derive(Clone, Default)]
pub enum WalletCapability {
    #[default]
    Absent,
    Present(Arc<dyn WalletProvider>),
}

impl WalletCapability {
    pub fn present(provider: Arc<dyn WalletProvider>) -> Self {
        WalletCapability::Present(provider)
    }

    /// The provider, but only if it is a Phantom wallet
    pub fn phantom(&self) -> Option<&Arc<dyn WalletProvider>> {
        match self {
            WalletCapability::Present(provider) if provider.is_phantom() => Some(provider),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<&Arc<dyn WalletProvider>> {
        match self {
            WalletCapability::Present(provider) => Some(provider),
            WalletCapability::Absent => None,
        }
    }
}

impl std::fmt::Debug for WalletCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletCapability::Absent => f.write_str("Absent"),
            WalletCapability::Present(p) => f
                .debug_struct("Present")
                .field("is_phantom", &p.is_phantom())
                .field("is_connected", &p.is_connected())
                .finish(),
        }
    }
}
