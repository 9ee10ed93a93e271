//! Data models for the pool session

pub mod session;
pub mod balance;
pub mod status;
pub mod investment;

// Re-export for convenience
pub use session::{Session, SessionSnapshot, SessionState};
pub use balance::{BalanceReading, BALANCE_PLACEHOLDER};
pub use status::StatusMessage;
pub use investment::{InvestmentInput, DEFAULT_INVESTMENT_AMOUNT};
