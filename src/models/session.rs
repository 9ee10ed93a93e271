use std::fmt;

/// Connection lifecycle as the view sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Disconnected => "Disconnected",
            SessionState::Connecting => "Connecting",
            SessionState::Connected => "Connected",
        };
        f.write_str(label)
    }
}

/// The adopted wallet address, if any.
///
/// A non-empty address is the only thing that makes the UI "connected".
/// Nothing re-checks the provider once an address has been adopted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub address: Option<String>,
}

impl Session {
    /// Create a session for an address; an empty string yields an empty session
    pub fn with_address(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            address: (!address.is_empty()).then_some(address),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Address or the empty string
    pub fn address_str(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

/// Point-in-time copy of everything the controller owns.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub session: Session,
    pub balance: super::balance::BalanceReading,
    pub generation: u64,
}
