//! Pure rendering of the pool page.
//!
//! `render` maps a [`ViewState`] to a [`PoolView`] whose elements carry the
//! stable ids a front end binds to. No I/O and no mutation happen here.

use std::fmt;

use crate::models::{BalanceReading, InvestmentInput, Session, SessionSnapshot, SessionState};
use crate::utils::display_name::derive_name;

pub const TITLE: &str = "My Solana Pool";
pub const WALLET_INSTRUCTION: &str = "Connect your wallet to participate in the decentralized pool.";
pub const CONNECT_LABEL: &str = "Connect Phantom Wallet";
pub const DISCONNECT_LABEL: &str = "Disconnect";
pub const CONVERSION_NOTE: &str = "5 SOL = 1 Token";

pub const ID_WALLET_INSTRUCTION: &str = "wallet-instruction";
pub const ID_WALLET_CONTROLS: &str = "wallet-controls";
pub const ID_APP_UI: &str = "app-ui";
pub const ID_WALLET_CONNECTED: &str = "wallet-connected";
pub const ID_WALLET_ADDRESS: &str = "wallet-address";
pub const ID_WALLET_BALANCE: &str = "wallet-balance";
pub const ID_STATUS_MESSAGE: &str = "status-message";
pub const ID_SOL_AMOUNT: &str = "sol-amount";
pub const ID_INVEST_BUTTON: &str = "invest-button";
pub const ID_WITHDRAW_BUTTON: &str = "withdraw-button";

/// Everything the page is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub state: SessionState,
    pub session: Session,
    pub balance: BalanceReading,
    pub status: String,
    pub input: InvestmentInput,
}

impl ViewState {
    pub fn new(snapshot: SessionSnapshot, status: String, input: InvestmentInput) -> Self {
        Self {
            state: snapshot.state,
            session: snapshot.session,
            balance: snapshot.balance,
            status,
            input,
        }
    }
}

/// What the wallet-controls button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Connect,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectControl {
    pub button: Button,
    pub action: ControlAction,
}

/// Display name of the wallet; clicking it copies `title`'s address
#[derive(Debug, Clone, PartialEq)]
pub struct WalletName {
    pub id: &'static str,
    pub text: String,
    pub title: String,
    pub copy_payload: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountInput {
    pub id: &'static str,
    pub value: f64,
    pub min: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolView {
    pub title: &'static str,
    pub instruction: Option<&'static str>,
    pub control: ConnectControl,
    /// Whether the `app-ui` container is shown; its contents render either way
    pub app_ui_visible: bool,
    pub wallet_name: WalletName,
    pub balance: String,
    pub status: String,
    pub amount: AmountInput,
    pub invest: Button,
    pub withdraw: Button,
}

/// Render the page for `state`
pub fn render(state: &ViewState) -> PoolView {
    let address = state.session.address_str();
    let connected = state.session.is_connected();

    let control = if connected {
        ConnectControl {
            button: Button {
                id: ID_WALLET_CONTROLS,
                label: DISCONNECT_LABEL,
                disabled: false,
            },
            action: ControlAction::Disconnect,
        }
    } else {
        ConnectControl {
            button: Button {
                id: ID_WALLET_CONTROLS,
                label: CONNECT_LABEL,
                disabled: state.state == SessionState::Connecting,
            },
            action: ControlAction::Connect,
        }
    };

    PoolView {
        title: TITLE,
        instruction: (!connected).then_some(WALLET_INSTRUCTION),
        control,
        app_ui_visible: connected,
        wallet_name: WalletName {
            id: ID_WALLET_ADDRESS,
            text: derive_name(address),
            title: format!("{} (Click to copy)", address),
            copy_payload: address.to_string(),
        },
        balance: state.balance.display(),
        status: state.status.clone(),
        amount: AmountInput {
            id: ID_SOL_AMOUNT,
            value: state.input.amount,
            min: 0.0,
            note: CONVERSION_NOTE,
        },
        invest: Button {
            id: ID_INVEST_BUTTON,
            label: "Invest",
            disabled: false,
        },
        withdraw: Button {
            id: ID_WITHDRAW_BUTTON,
            label: "Withdraw",
            disabled: false,
        },
    }
}

impl fmt::Display for PoolView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(60))?;
        if let Some(instruction) = self.instruction {
            writeln!(f, "[{}] {}", ID_WALLET_INSTRUCTION, instruction)?;
        }
        writeln!(
            f,
            "[{}] ({}){}",
            self.control.button.id,
            self.control.button.label,
            if self.control.button.disabled { " disabled" } else { "" }
        )?;
        writeln!(
            f,
            "[{}] {}",
            ID_APP_UI,
            if self.app_ui_visible { "visible" } else { "hidden" }
        )?;
        writeln!(
            f,
            "  [{}] Wallet connected: {} <{}>",
            ID_WALLET_CONNECTED, self.wallet_name.text, self.wallet_name.title
        )?;
        writeln!(f, "  [{}] Your balance: {} SOL", ID_WALLET_BALANCE, self.balance)?;
        writeln!(f, "  [{}] {}", ID_STATUS_MESSAGE, self.status)?;
        writeln!(
            f,
            "  [{}] {} (min {}) {}",
            self.amount.id, self.amount.value, self.amount.min, self.amount.note
        )?;
        writeln!(
            f,
            "  [{}] ({})  [{}] ({})",
            self.invest.id, self.invest.label, self.withdraw.id, self.withdraw.label
        )?;
        write!(f, "{}", "=".repeat(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(address: &str, lamports: Option<u64>) -> ViewState {
        let session = Session::with_address(address);
        ViewState {
            state: if session.is_connected() {
                SessionState::Connected
            } else {
                SessionState::Disconnected
            },
            session,
            balance: BalanceReading { lamports },
            status: String::new(),
            input: InvestmentInput::default(),
        }
    }

    #[test]
    fn disconnected_page_offers_connect() {
        let view = render(&state("", None));
        assert_eq!(view.instruction, Some(WALLET_INSTRUCTION));
        assert_eq!(view.control.action, ControlAction::Connect);
        assert_eq!(view.control.button.label, CONNECT_LABEL);
        assert!(!view.app_ui_visible);
        assert_eq!(view.wallet_name.text, "");
        assert_eq!(view.balance, "—");
    }

    #[test]
    fn connected_page_shows_name_not_address() {
        let view = render(&state("Abc123", Some(2_000_000_000)));
        assert_eq!(view.instruction, None);
        assert_eq!(view.control.action, ControlAction::Disconnect);
        assert!(view.app_ui_visible);
        assert_eq!(view.wallet_name.text, "Blockchain Builder");
        assert_eq!(view.wallet_name.title, "Abc123 (Click to copy)");
        assert_eq!(view.wallet_name.copy_payload, "Abc123");
        assert_eq!(view.balance, "2.0000");
    }

    #[test]
    fn failed_balance_renders_placeholder() {
        let view = render(&state("Abc123", None));
        assert_eq!(view.balance, "—");
    }

    #[test]
    fn connect_button_disabled_while_connecting() {
        let mut connecting = state("", None);
        connecting.state = SessionState::Connecting;
        let view = render(&connecting);
        assert!(view.control.button.disabled);
        assert_eq!(view.control.action, ControlAction::Connect);
    }

    #[test]
    fn amount_input_is_not_gated_on_connection() {
        let mut disconnected = state("", None);
        disconnected.input = InvestmentInput::new(12.0);
        let view = render(&disconnected);
        assert_eq!(view.amount.value, 12.0);
        assert_eq!(view.amount.min, 0.0);
        assert_eq!(view.amount.note, CONVERSION_NOTE);
    }

    #[test]
    fn text_rendering_mentions_every_element() {
        let rendered = render(&state("Abc123", Some(0))).to_string();
        for id in [
            ID_WALLET_CONTROLS,
            ID_APP_UI,
            ID_WALLET_CONNECTED,
            ID_WALLET_BALANCE,
            ID_STATUS_MESSAGE,
            ID_SOL_AMOUNT,
            ID_INVEST_BUTTON,
            ID_WITHDRAW_BUTTON,
        ] {
            assert!(rendered.contains(id), "missing {}", id);
        }
        assert!(rendered.contains("Your balance: 0.0000 SOL"));
    }
}
