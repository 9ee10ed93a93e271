use thiserror::Error;

/// Why a connect attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No Phantom capability was injected. Surfaced as a blocking notice.
    #[error("phantom wallet not found")]
    ProviderMissing,
    /// The user or the provider declined the request.
    #[error("connect rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("balance fetch failed: {0}")]
    BalanceFetchFailed(String),
    #[error("disconnect failed: {0}")]
    DisconnectFailed(String),
    /// The display text doubles as the status line shown to the user.
    #[error("Enter a positive SOL amount.")]
    InvalidInvestmentAmount,
    #[error("clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
