use std::sync::Arc;

use tracing::{error, info};

use crate::config::Cluster;
use crate::errors::PoolError;
use crate::traits::balance_provider::BalanceProvider;
use crate::utils::helper::{format_address, lamports_to_sol};

/// Reads the balance of the connected address from the configured cluster.
///
/// Never fails: errors are logged and reported as "no reading".
#[derive(Clone)]
pub struct BalanceFetcher {
    provider: Arc<dyn BalanceProvider>,
    cluster: Cluster,
}

impl BalanceFetcher {
    pub fn new(provider: Arc<dyn BalanceProvider>, cluster: Cluster) -> Self {
        Self { provider, cluster }
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Lamport balance of `address`, or `None` if the lookup failed
    pub async fn fetch(&self, address: &str) -> Option<u64> {
        match self.provider.get_balance(address, &self.cluster).await {
            Ok(lamports) => {
                info!(
                    "Balance for {}: ◎{:.4}",
                    format_address(address),
                    lamports_to_sol(lamports)
                );
                Some(lamports)
            }
            Err(e) => {
                let err = PoolError::BalanceFetchFailed(format!("{:#}", e));
                error!("{} (address {}, cluster {})", err, format_address(address), self.cluster);
                None
            }
        }
    }
}
