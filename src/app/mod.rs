//! Application shell: turns user actions into controller, ledger and
//! clipboard calls and exposes the rendered page.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::errors::{ConnectError, PoolError};
use crate::ledger::SimulatedLedger;
use crate::models::InvestmentInput;
use crate::notifications::StatusNotifier;
use crate::session::{BalanceFetcher, SessionController};
use crate::traits::{BalanceProvider, Clipboard, SessionEventHandler, WalletCapability};
use crate::view::{self, PoolView, ViewState};

pub const PROVIDER_MISSING_NOTICE: &str = "Phantom wallet not found! Please install Phantom.";
pub const STATUS_COPIED: &str = "Address copied to clipboard!";
pub const STATUS_COPY_FAILED: &str = "Failed to copy address";

/// Things the user can do on the page
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Connect,
    Disconnect,
    /// Click on the wallet name
    CopyAddress,
    /// Raw text typed into the amount input
    SetAmount(String),
    Invest,
    Withdraw,
}

/// The pool page with all of its collaborators wired together
pub struct PoolApp {
    controller: SessionController,
    notifier: StatusNotifier,
    ledger: SimulatedLedger,
    clipboard: Arc<dyn Clipboard>,
    handler: Arc<dyn SessionEventHandler>,
    input: Mutex<InvestmentInput>,
    copy_status_ttl: Duration,
}

impl PoolApp {
    pub fn new(
        config: &AppConfig,
        wallet: WalletCapability,
        balances: Arc<dyn BalanceProvider>,
        clipboard: Arc<dyn Clipboard>,
        handler: Arc<dyn SessionEventHandler>,
    ) -> Self {
        let notifier = StatusNotifier::new(handler.clone());
        let fetcher = BalanceFetcher::new(balances, config.cluster.clone());
        let controller = SessionController::new(wallet, fetcher, notifier.clone(), handler.clone());

        Self {
            controller,
            notifier,
            ledger: SimulatedLedger::new(),
            clipboard,
            handler,
            input: Mutex::new(InvestmentInput::default()),
            copy_status_ttl: config.copy_status_ttl,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn notifier(&self) -> &StatusNotifier {
        &self.notifier
    }

    /// Page load: pick up a wallet that is already connected
    pub async fn start(&self) {
        let session = self.controller.probe_existing().await;
        if session.is_connected() {
            info!("Started with an existing wallet session");
        } else {
            info!("Started without a wallet session");
        }
    }

    /// Handle one user action. Every failure ends up in the log, the status
    /// line or a blocking notice; nothing is returned to the caller.
    pub async fn dispatch(&self, action: UserAction) {
        debug!("Dispatching {:?}", action);
        match action {
            UserAction::Connect => self.connect().await,
            UserAction::Disconnect => self.controller.disconnect().await,
            UserAction::CopyAddress => self.copy_address().await,
            UserAction::SetAmount(text) => self.input.lock().await.set_from_text(&text),
            UserAction::Invest => self.invest().await,
            UserAction::Withdraw => {
                self.notifier.set_status(self.ledger.withdraw(), None).await;
            }
        }
    }

    /// Render the current page
    pub async fn view(&self) -> PoolView {
        let state = ViewState::new(
            self.controller.snapshot().await,
            self.notifier.text().await,
            *self.input.lock().await,
        );
        view::render(&state)
    }

    async fn connect(&self) {
        match self.controller.connect().await {
            Ok(_) => {}
            Err(ConnectError::ProviderMissing) => {
                self.handler.on_blocking_notice(PROVIDER_MISSING_NOTICE).await;
            }
            // already logged and reported on the status line
            Err(ConnectError::Rejected(_)) => {}
        }
    }

    /// Copy the raw address behind the display name
    pub async fn copy_address(&self) {
        let session = self.controller.session().await;
        let Some(address) = session.address.filter(|a| !a.is_empty()) else {
            debug!("Nothing to copy, no wallet connected");
            return;
        };

        match self.clipboard.write_text(&address).await {
            Ok(()) => {
                self.notifier
                    .set_status(STATUS_COPIED, Some(self.copy_status_ttl))
                    .await;
            }
            Err(e) => {
                error!("{}", PoolError::ClipboardWriteFailed(format!("{:#}", e)));
                self.notifier.set_status(STATUS_COPY_FAILED, None).await;
            }
        }
    }

    async fn invest(&self) {
        let amount = self.input.lock().await.amount;
        let text = match self.ledger.invest(amount) {
            Ok(text) => text,
            Err(e) => {
                debug!("Rejected investment of {}: {}", amount, e);
                e.to_string()
            }
        };
        self.notifier.set_status(text, None).await;
    }
}

impl Default for PoolApp {
    /// No wallet, no-op handlers; mostly useful for tests
    fn default() -> Self {
        Self::new(
            &AppConfig::default(),
            WalletCapability::Absent,
            Arc::new(crate::providers::RpcBalanceProvider::new()),
            Arc::new(crate::providers::MemoryClipboard::new()),
            Arc::new(crate::handlers::NoopEventHandler),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn amount_is_editable_without_a_wallet() {
        let app = PoolApp::default();
        app.dispatch(UserAction::SetAmount("12".into())).await;
        app.dispatch(UserAction::Invest).await;

        let view = app.view().await;
        assert!(!view.app_ui_visible);
        assert_eq!(view.amount.value, 12.0);
        assert_eq!(view.status, "(TEST MODE) Invested 12 SOL → received 2 token(s).");
    }

    #[tokio::test]
    async fn invalid_amount_sets_validation_message() {
        let app = PoolApp::default();
        app.dispatch(UserAction::SetAmount("abc".into())).await;
        app.dispatch(UserAction::Invest).await;
        assert_eq!(app.notifier().text().await, "Enter a positive SOL amount.");
    }

    #[tokio::test]
    async fn withdraw_sets_simulated_message() {
        let app = PoolApp::default();
        app.dispatch(UserAction::Withdraw).await;
        assert_eq!(
            app.notifier().text().await,
            "(TEST MODE) Withdraw simulated (no real SOL moved)."
        );
    }

    #[tokio::test]
    async fn copy_without_wallet_is_a_no_op() {
        let app = PoolApp::default();
        app.dispatch(UserAction::CopyAddress).await;
        assert_eq!(app.notifier().text().await, "");
    }
}
