use async_trait::async_trait;

use crate::config::Cluster;

/// Read-only balance lookup against a ledger service
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Balance of `address` on `cluster`, in lamports
    async fn get_balance(&self, address: &str, cluster: &Cluster) -> anyhow::Result<u64>;
}
