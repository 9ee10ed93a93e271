//! Concrete implementations of the external seams

pub mod rpc_provider;
pub mod static_wallet;
pub mod memory_clipboard;

// Re-export for convenience
pub use rpc_provider::RpcBalanceProvider;
pub use static_wallet::StaticWalletProvider;
pub use memory_clipboard::MemoryClipboard;
