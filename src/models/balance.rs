use crate::utils::helper::lamports_to_sol;

/// Shown in place of the balance when no reading is available
pub const BALANCE_PLACEHOLDER: &str = "—";

/// Last balance reported for the connected address, in lamports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceReading {
    pub lamports: Option<u64>,
}

impl BalanceReading {
    pub fn absent() -> Self {
        Self { lamports: None }
    }

    pub fn from_lamports(lamports: u64) -> Self {
        Self { lamports: Some(lamports) }
    }

    pub fn is_absent(&self) -> bool {
        self.lamports.is_none()
    }

    /// Balance in SOL
    pub fn sol(&self) -> Option<f64> {
        self.lamports.map(lamports_to_sol)
    }

    /// Four decimal places, or the placeholder glyph when absent
    pub fn display(&self) -> String {
        match self.sol() {
            Some(sol) => format!("{:.4}", sol),
            None => BALANCE_PLACEHOLDER.to_string(),
        }
    }
}
