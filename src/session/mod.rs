//! Wallet session lifecycle and balance tracking

pub mod balance_fetcher;
pub mod controller;

pub use balance_fetcher::BalanceFetcher;
pub use controller::{SessionController, STATUS_CONNECTED, STATUS_CONNECT_FAILED, STATUS_DISCONNECTED};
