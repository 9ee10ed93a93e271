//! Test-mode invest/withdraw. Nothing here touches a balance or the network.

use crate::errors::{PoolError, PoolResult};

/// Native units per pool token
pub const SOL_PER_TOKEN: f64 = 5.0;

pub const WITHDRAW_MESSAGE: &str = "(TEST MODE) Withdraw simulated (no real SOL moved).";

/// Simulated pool ledger producing status text only
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLedger;

impl SimulatedLedger {
    pub fn new() -> Self {
        Self
    }

    /// Whole tokens an amount buys, truncating.
    ///
    /// Stays in `f64`: the input has no upper bound.
    pub fn tokens_for(amount: f64) -> f64 {
        (amount / SOL_PER_TOKEN).floor()
    }

    /// Pretend to invest `amount` SOL.
    ///
    /// Rejects zero, negative, NaN and infinite amounts.
    pub fn invest(&self, amount: f64) -> PoolResult<String> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PoolError::InvalidInvestmentAmount);
        }
        let tokens = Self::tokens_for(amount);
        Ok(format!(
            "(TEST MODE) Invested {} SOL → received {} token(s).",
            amount, tokens
        ))
    }

    /// Pretend to withdraw
    pub fn withdraw(&self) -> String {
        WITHDRAW_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_count_truncates_at_multiples_of_five() {
        let cases = [
            (0.1, 0),
            (4.9, 0),
            (5.0, 1),
            (9.99, 1),
            (10.0, 2),
            (14.999, 2),
            (15.0, 3),
        ];
        for (amount, tokens) in cases {
            assert_eq!(SimulatedLedger::tokens_for(amount), tokens as f64, "amount {}", amount);
        }
    }

    #[test]
    fn invest_reports_amount_and_tokens() {
        let ledger = SimulatedLedger::new();
        assert_eq!(
            ledger.invest(5.0).unwrap(),
            "(TEST MODE) Invested 5 SOL → received 1 token(s)."
        );
        assert_eq!(
            ledger.invest(7.5).unwrap(),
            "(TEST MODE) Invested 7.5 SOL → received 1 token(s)."
        );
        assert_eq!(
            ledger.invest(4.9).unwrap(),
            "(TEST MODE) Invested 4.9 SOL → received 0 token(s)."
        );
    }

    #[test]
    fn huge_amounts_do_not_saturate() {
        let tokens = SimulatedLedger::tokens_for(1e30);
        assert_eq!(tokens, (1e30_f64 / 5.0).floor());
        assert!(tokens > u64::MAX as f64);

        let text = SimulatedLedger::new().invest(1e30).unwrap();
        assert!(text.contains(&format!("received {} token(s)", tokens)));
        assert!(!text.contains(&u64::MAX.to_string()));
    }

    #[test]
    fn invest_rejects_non_positive_and_non_numeric() {
        let ledger = SimulatedLedger::new();
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ledger.invest(amount).unwrap_err();
            assert!(matches!(err, PoolError::InvalidInvestmentAmount));
            assert_eq!(err.to_string(), "Enter a positive SOL amount.");
        }
    }

    #[test]
    fn withdraw_is_constant() {
        let ledger = SimulatedLedger::new();
        assert_eq!(ledger.withdraw(), WITHDRAW_MESSAGE);
        assert_eq!(ledger.withdraw(), ledger.withdraw());
    }
}
