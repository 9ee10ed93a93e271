use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::{ConnectError, PoolError};
use crate::models::{BalanceReading, Session, SessionSnapshot, SessionState};
use crate::notifications::StatusNotifier;
use crate::session::balance_fetcher::BalanceFetcher;
use crate::traits::{event_handler::SessionEventHandler, wallet_provider::WalletCapability};
use crate::utils::helper::format_address;

pub const STATUS_CONNECTED: &str = "Connected";
pub const STATUS_CONNECT_FAILED: &str = "Connect failed";
pub const STATUS_DISCONNECTED: &str = "Disconnected";

/// Everything the controller is the single writer of
#[derive(Debug, Default)]
struct SessionInner {
    session: Session,
    balance: BalanceReading,
    /// Bumped on every address change; balance results carry the value they were issued under
    generation: u64,
    /// Connect calls awaiting the provider
    connecting: usize,
    /// Bumped by disconnect; in-flight connects issued under an older epoch no longer count
    connect_epoch: u64,
}

impl SessionInner {
    fn state(&self) -> SessionState {
        if self.session.is_connected() {
            SessionState::Connected
        } else if self.connecting > 0 {
            SessionState::Connecting
        } else {
            SessionState::Disconnected
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            session: self.session.clone(),
            balance: self.balance,
            generation: self.generation,
        }
    }

    fn adopt(&mut self, address: &str) -> u64 {
        self.generation += 1;
        self.session = Session::with_address(address);
        self.balance = BalanceReading::absent();
        self.generation
    }

    /// Settle one pending connect, unless a disconnect already wrote it off
    fn finish_connect(&mut self, epoch: u64) {
        if self.connect_epoch == epoch {
            self.connecting = self.connecting.saturating_sub(1);
        }
    }

    fn clear(&mut self) {
        self.generation += 1;
        self.connecting = 0;
        self.connect_epoch += 1;
        self.session = Session::default();
        self.balance = BalanceReading::absent();
    }
}

/// Owns the wallet connection lifecycle and the balance of the connected address.
///
/// The adopted address is the only source of truth for "connected"; the
/// provider is not polled again once an address is adopted. Balance lookups
/// run as detached tasks and only land if the session they were issued for
/// is still current.
#[derive(Clone)]
pub struct SessionController {
    wallet: WalletCapability,
    fetcher: BalanceFetcher,
    notifier: StatusNotifier,
    handler: Arc<dyn SessionEventHandler>,
    inner: Arc<Mutex<SessionInner>>,
    fetch_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SessionController {
    /// Create a controller with an empty session
    pub fn new(
        wallet: WalletCapability,
        fetcher: BalanceFetcher,
        notifier: StatusNotifier,
        handler: Arc<dyn SessionEventHandler>,
    ) -> Self {
        Self {
            wallet,
            fetcher,
            notifier,
            handler,
            inner: Arc::new(Mutex::new(SessionInner::default())),
            fetch_task: Arc::new(Mutex::new(None)),
        }
    }

    pub fn notifier(&self) -> &StatusNotifier {
        &self.notifier
    }

    pub async fn session(&self) -> Session {
        self.inner.lock().await.session.clone()
    }

    pub async fn balance(&self) -> BalanceReading {
        self.inner.lock().await.balance
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// Adopt a connection the provider already has (page load).
    ///
    /// Absent, non-Phantom or disconnected providers leave the session empty.
    pub async fn probe_existing(&self) -> Session {
        let Some(provider) = self.wallet.phantom().cloned() else {
            debug!("No Phantom provider injected, starting disconnected");
            return self.session().await;
        };

        if !provider.is_connected() {
            info!("Phantom provider present but not connected");
            return self.session().await;
        }

        match provider.public_key().filter(|key| !key.is_empty()) {
            Some(address) => {
                info!("Restoring existing wallet session: {}", format_address(&address));
                self.adopt(address, None).await
            }
            None => {
                warn!("Provider reports a connection but exposes no public key");
                self.session().await
            }
        }
    }

    /// Ask the provider to connect and adopt the returned address.
    ///
    /// A disconnect while the provider is pending ends the `Connecting` state
    /// right away. The address still gets adopted if the provider resolves later.
    pub async fn connect(&self) -> Result<Session, ConnectError> {
        let Some(provider) = self.wallet.phantom().cloned() else {
            warn!("Connect requested but no Phantom provider is available");
            return Err(ConnectError::ProviderMissing);
        };

        let (epoch, snapshot) = {
            let mut inner = self.inner.lock().await;
            inner.connecting += 1;
            (inner.connect_epoch, inner.snapshot())
        };
        self.handler.on_session_changed(&snapshot).await;

        let outcome = match provider.connect().await {
            Ok(address) if !address.is_empty() => Ok(address),
            Ok(_) => Err(anyhow::anyhow!("provider returned an empty public key")),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(address) => {
                info!("Wallet connected: {}", format_address(&address));
                let session = self.adopt(address, Some(epoch)).await;
                self.notifier.set_status(STATUS_CONNECTED, None).await;
                Ok(session)
            }
            Err(e) => {
                let snapshot = {
                    let mut inner = self.inner.lock().await;
                    inner.finish_connect(epoch);
                    inner.snapshot()
                };
                self.handler.on_session_changed(&snapshot).await;

                let err = ConnectError::Rejected(format!("{:#}", e));
                error!("connect error: {}", err);
                self.notifier.set_status(STATUS_CONNECT_FAILED, None).await;
                Err(err)
            }
        }
    }

    /// Drop the session.
    ///
    /// The provider call is best effort; local state is cleared whatever it does.
    pub async fn disconnect(&self) {
        match self.wallet.provider() {
            Some(provider) if provider.supports_disconnect() => {
                if let Err(e) = provider.disconnect().await {
                    warn!("{}", PoolError::DisconnectFailed(format!("{:#}", e)));
                }
            }
            Some(_) => debug!("Provider has no disconnect capability"),
            None => debug!("No provider to disconnect from"),
        }

        let snapshot = {
            let mut inner = self.inner.lock().await;
            inner.clear();
            inner.snapshot()
        };
        info!("Wallet disconnected");
        self.handler.on_session_changed(&snapshot).await;
        self.notifier.set_status(STATUS_DISCONNECTED, None).await;
    }

    /// Wait for the most recently issued balance fetch to finish
    pub async fn settle(&self) {
        let task = self.fetch_task.lock().await.take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    error!("Balance fetch task failed: {}", e);
                }
            }
        }
    }

    /// `connect_epoch` is set when the address comes from a connect call
    async fn adopt(&self, address: String, connect_epoch: Option<u64>) -> Session {
        let (session, generation, snapshot) = {
            let mut inner = self.inner.lock().await;
            if let Some(epoch) = connect_epoch {
                inner.finish_connect(epoch);
            }
            let generation = inner.adopt(&address);
            (inner.session.clone(), generation, inner.snapshot())
        };
        self.handler.on_session_changed(&snapshot).await;
        self.spawn_balance_fetch(address, generation).await;
        session
    }

    async fn spawn_balance_fetch(&self, address: String, generation: u64) {
        let fetcher = self.fetcher.clone();
        let inner = self.inner.clone();
        let handler = self.handler.clone();

        let task = tokio::spawn(async move {
            let lamports = fetcher.fetch(&address).await;

            let snapshot = {
                let mut inner = inner.lock().await;
                if inner.generation != generation {
                    debug!(
                        "Discarding balance for superseded session (issued at {}, now {})",
                        generation, inner.generation
                    );
                    return;
                }
                inner.balance = BalanceReading { lamports };
                inner.snapshot()
            };
            handler.on_session_changed(&snapshot).await;
        });

        // An older fetch keeps running detached; its result is dropped by the generation check
        *self.fetch_task.lock().await = Some(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cluster;
    use crate::handlers::NoopEventHandler;
    use crate::providers::StaticWalletProvider;
    use crate::traits::balance_provider::BalanceProvider;
    use crate::traits::WalletProvider;
    use async_trait::async_trait;

    struct FixedBalance(u64);

    #[async_trait]
    impl BalanceProvider for FixedBalance {
        async fn get_balance(&self, _address: &str, _cluster: &Cluster) -> anyhow::Result<u64> {
            Ok(self.0)
        }
    }

    fn controller(wallet: WalletCapability) -> SessionController {
        let handler: Arc<dyn SessionEventHandler> = Arc::new(NoopEventHandler);
        SessionController::new(
            wallet,
            BalanceFetcher::new(Arc::new(FixedBalance(1_000_000_000)), Cluster::Devnet),
            StatusNotifier::new(handler.clone()),
            handler,
        )
    }

    #[tokio::test]
    async fn starts_disconnected() {
        let controller = controller(WalletCapability::Absent);
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state, SessionState::Disconnected);
        assert_eq!(snapshot.generation, 0);
        assert!(snapshot.balance.is_absent());
    }

    #[tokio::test]
    async fn probe_adopts_preconnected_wallet() {
        let wallet = Arc::new(StaticWalletProvider::preconnected("Abc123"));
        let controller = controller(WalletCapability::present(wallet));

        let session = controller.probe_existing().await;
        assert_eq!(session.address.as_deref(), Some("Abc123"));

        controller.settle().await;
        assert_eq!(controller.balance().await.lamports, Some(1_000_000_000));
        assert_eq!(controller.state().await, SessionState::Connected);
        // probing is silent
        assert_eq!(controller.notifier().text().await, "");
    }

    #[tokio::test]
    async fn probe_ignores_disconnected_wallet() {
        let wallet = Arc::new(StaticWalletProvider::new("Abc123"));
        let controller = controller(WalletCapability::present(wallet));

        assert_eq!(controller.probe_existing().await, Session::default());
        assert_eq!(controller.state().await, SessionState::Disconnected);
    }

    #[tokio::test]
    async fn connect_then_disconnect_round_trip() {
        let wallet = Arc::new(StaticWalletProvider::new("Abc123"));
        let controller = controller(WalletCapability::present(wallet.clone()));

        controller.connect().await.unwrap();
        controller.settle().await;
        assert_eq!(controller.notifier().text().await, STATUS_CONNECTED);
        assert_eq!(controller.balance().await.display(), "1.0000");

        controller.disconnect().await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state, SessionState::Disconnected);
        assert_eq!(snapshot.session, Session::default());
        assert!(snapshot.balance.is_absent());
        assert_eq!(snapshot.generation, 2);
        assert!(!wallet.is_connected());
        assert_eq!(controller.notifier().text().await, STATUS_DISCONNECTED);
    }

    #[test]
    fn clear_writes_off_pending_connects() {
        let mut inner = SessionInner::default();
        inner.connecting = 2;
        let epoch = inner.connect_epoch;
        assert_eq!(inner.state(), SessionState::Connecting);

        inner.clear();
        assert_eq!(inner.state(), SessionState::Disconnected);

        // completions from before the clear must not touch newer attempts
        inner.connecting = 1;
        inner.finish_connect(epoch);
        assert_eq!(inner.connecting, 1);
        inner.finish_connect(inner.connect_epoch);
        assert_eq!(inner.connecting, 0);
    }
}
