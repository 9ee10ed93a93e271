//! Seams to everything outside the session layer

pub mod wallet_provider;
pub mod balance_provider;
pub mod clipboard;
pub mod event_handler;

// Re-export for convenience
pub use wallet_provider::{WalletCapability, WalletProvider};
pub use balance_provider::BalanceProvider;
pub use clipboard::Clipboard;
pub use event_handler::SessionEventHandler;
