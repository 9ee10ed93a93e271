use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use tracing::debug;

use crate::config::Cluster;
use crate::traits::balance_provider::BalanceProvider;
use crate::utils::helper::parse_pubkey;

/// JSON-RPC balance provider
pub struct RpcBalanceProvider {
    commitment: CommitmentConfig,
    clients: Arc<DashMap<Cluster, Arc<RpcClient>>>,
}

impl RpcBalanceProvider {
    /// Create a provider reading at `confirmed` commitment
    pub fn new() -> Self {
        Self::with_commitment(CommitmentLevel::Confirmed)
    }

    pub fn with_commitment(commitment: CommitmentLevel) -> Self {
        Self {
            commitment: CommitmentConfig { commitment },
            clients: Arc::new(DashMap::new()),
        }
    }

    /// RPC client for a cluster, created on first use
    pub fn rpc_client(&self, cluster: &Cluster) -> Arc<RpcClient> {
        let client = self
            .clients
            .entry(cluster.clone())
            .or_insert_with(|| {
                debug!("Opening RPC client for {} at {}", cluster, cluster.url());
                Arc::new(RpcClient::new_with_commitment(
                    cluster.url().to_string(),
                    self.commitment,
                ))
            });
        Arc::clone(&client)
    }
}

impl Default for RpcBalanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceProvider for RpcBalanceProvider {
    async fn get_balance(&self, address: &str, cluster: &Cluster) -> anyhow::Result<u64> {
        let pubkey = parse_pubkey(address)?;
        let client = self.rpc_client(cluster);
        let lamports = client.get_balance(&pubkey).await?;
        debug!("Balance for {} on {}: {} lamports", pubkey, cluster, lamports);
        Ok(lamports)
    }
}
