//! Solana Pool Session Library
//!
//! Wallet connection lifecycle, balance readout, transient status line and
//! a simulated invest/withdraw ledger for a small Solana pool front end.
//! The wallet, the balance service, the clipboard and the page renderer are
//! all reached through traits so they can be swapped for fakes.

// Public modules - these are the API surface
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod notifications;
pub mod providers;
pub mod session;
pub mod traits;
pub mod utils;
pub mod view;

// Re-export commonly used items for easier access
pub use app::{PoolApp, UserAction};
pub use config::{AppConfig, Cluster};
pub use errors::{ConnectError, PoolError};
pub use models::{
    balance::BalanceReading,
    investment::InvestmentInput,
    session::{Session, SessionSnapshot, SessionState},
    status::StatusMessage,
};
pub use traits::{
    wallet_provider::{WalletCapability, WalletProvider},
    balance_provider::BalanceProvider,
    clipboard::Clipboard,
    event_handler::SessionEventHandler,
};
pub use providers::{
    rpc_provider::RpcBalanceProvider,
    static_wallet::StaticWalletProvider,
    memory_clipboard::MemoryClipboard,
};
pub use handlers::{
    console::ConsoleEventHandler,
    noop::NoopEventHandler,
};
pub use ledger::SimulatedLedger;
pub use notifications::StatusNotifier;
pub use session::{BalanceFetcher, SessionController};
pub use utils::display_name::derive_name;
pub use view::{render, PoolView, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
