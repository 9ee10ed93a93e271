/// Amount shown in the input before the user touches it
pub const DEFAULT_INVESTMENT_AMOUNT: f64 = 5.0;

/// The amount typed into the SOL input.
///
/// Editable whether or not a wallet is connected. Values are kept as typed
/// (including NaN and negatives); the ledger decides what is acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentInput {
    pub amount: f64,
}

impl InvestmentInput {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Update from raw input text. Blank input reads as zero, anything
    /// that is not a number reads as NaN.
    pub fn set_from_text(&mut self, text: &str) {
        let trimmed = text.trim();
        self.amount = if trimmed.is_empty() {
            0.0
        } else {
            trimmed.parse::<f64>().unwrap_or(f64::NAN)
        };
    }
}

impl Default for InvestmentInput {
    fn default() -> Self {
        Self::new(DEFAULT_INVESTMENT_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_five_sol() {
        assert_eq!(InvestmentInput::default().amount, 5.0);
    }

    #[test]
    fn parses_text_like_a_number_field() {
        let mut input = InvestmentInput::default();

        input.set_from_text(" 12.5 ");
        assert_eq!(input.amount, 12.5);

        input.set_from_text("");
        assert_eq!(input.amount, 0.0);

        input.set_from_text("abc");
        assert!(input.amount.is_nan());

        input.set_from_text("-3");
        assert_eq!(input.amount, -3.0);
    }
}
