//! Runtime configuration, read from the environment (and `.env` via dotenvy in main).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

/// Expiry used for the "copied" confirmation
pub const DEFAULT_COPY_STATUS_TTL: Duration = Duration::from_millis(3000);

/// Solana network the balance is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    /// Explicit RPC endpoint
    Custom(String),
}

impl Cluster {
    /// Public JSON-RPC endpoint for the cluster
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Custom(url) => url,
        }
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Cluster::Devnet
    }
}

impl FromStr for Cluster {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            other => Err(anyhow::anyhow!("Unknown cluster: {}", other)),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => f.write_str("devnet"),
            Cluster::Testnet => f.write_str("testnet"),
            Cluster::MainnetBeta => f.write_str("mainnet-beta"),
            Cluster::Custom(url) => write!(f, "custom({})", url),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub cluster: Cluster,
    pub copy_status_ttl: Duration,
    /// Address behind the demo wallet; `None` means no wallet is injected
    pub wallet_address: Option<String>,
    /// Whether the demo wallet is already connected when the app starts
    pub wallet_preconnected: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            copy_status_ttl: DEFAULT_COPY_STATUS_TTL,
            wallet_address: None,
            wallet_preconnected: false,
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(cluster) = lookup("SOLANA_CLUSTER") {
            config.cluster = cluster
                .parse()
                .with_context(|| format!("SOLANA_CLUSTER={}", cluster))?;
        }

        // An explicit endpoint wins over the named cluster
        if let Some(url) = lookup("SOLANA_RPC_URL").filter(|u| !u.trim().is_empty()) {
            config.cluster = Cluster::Custom(url.trim().to_string());
        }

        if let Some(ttl) = lookup("COPY_STATUS_TTL_MS") {
            let ms: u64 = ttl
                .trim()
                .parse()
                .with_context(|| format!("COPY_STATUS_TTL_MS={}", ttl))?;
            config.copy_status_ttl = Duration::from_millis(ms);
        }

        config.wallet_address = lookup("WALLET_ADDRESS")
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        if let Some(flag) = lookup("WALLET_PRECONNECTED") {
            config.wallet_preconnected = flag
                .trim()
                .parse()
                .with_context(|| format!("WALLET_PRECONNECTED={}", flag))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_devnet_and_three_second_copy_ttl() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.cluster.url(), "https://api.devnet.solana.com");
        assert_eq!(config.copy_status_ttl, Duration::from_secs(3));
        assert_eq!(config.wallet_address, None);
        assert!(!config.wallet_preconnected);
    }

    #[test]
    fn rpc_url_overrides_named_cluster() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SOLANA_CLUSTER", "testnet"),
            ("SOLANA_RPC_URL", "http://127.0.0.1:8899"),
        ]))
        .unwrap();
        assert_eq!(config.cluster, Cluster::Custom("http://127.0.0.1:8899".into()));
    }

    #[test]
    fn reads_wallet_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("WALLET_ADDRESS", " Abc123 "),
            ("WALLET_PRECONNECTED", "true"),
            ("COPY_STATUS_TTL_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.wallet_address.as_deref(), Some("Abc123"));
        assert!(config.wallet_preconnected);
        assert_eq!(config.copy_status_ttl, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_unknown_cluster_and_bad_numbers() {
        assert!(AppConfig::from_lookup(lookup_from(&[("SOLANA_CLUSTER", "localnet")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("COPY_STATUS_TTL_MS", "soon")])).is_err());
    }

    #[test]
    fn mainnet_aliases_parse() {
        assert_eq!("mainnet-beta".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!("Mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
    }
}
