use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing::level_filters::LevelFilter;

use solana_pool_session::{
  AppConfig, ConsoleEventHandler, MemoryClipboard, PoolApp, RpcBalanceProvider,
  StaticWalletProvider, UserAction, WalletCapability,
};

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let level = std::env::var("LOG_LEVEL")
    .ok()
    .map(|l| l.parse::<LevelFilter>())
    .transpose()
    .context("LOG_LEVEL")?
    .unwrap_or(LevelFilter::INFO);

  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(level)
    .with_file(true)
    .with_line_number(true)
    .init();

  let config = AppConfig::from_env()?;

  // Single logical thread: UI events and I/O completions interleave on one runtime thread
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()?
    .block_on(async {
      info!("Solana pool session v{}", solana_pool_session::VERSION);
      info!("Cluster: {} ({})", config.cluster, config.cluster.url());

      let wallet = match &config.wallet_address {
        Some(address) if config.wallet_preconnected => WalletCapability::present(
          Arc::new(StaticWalletProvider::preconnected(address.clone())),
        ),
        Some(address) => WalletCapability::present(Arc::new(
          StaticWalletProvider::new(address.clone()),
        )),
        None => {
          info!("WALLET_ADDRESS not set, running without a wallet provider");
          WalletCapability::Absent
        }
      };

      let app = PoolApp::new(
        &config,
        wallet,
        Arc::new(RpcBalanceProvider::new()),
        Arc::new(MemoryClipboard::new()),
        Arc::new(ConsoleEventHandler::new()),
      );

      app.start().await;
      app.controller().settle().await;
      info!("\n{}", app.view().await);

      if !app.controller().session().await.is_connected() {
        app.dispatch(UserAction::Connect).await;
        app.controller().settle().await;
        info!("\n{}", app.view().await);
      }

      app.dispatch(UserAction::CopyAddress).await;
      info!("\n{}", app.view().await);

      app.dispatch(UserAction::SetAmount("12.5".to_string())).await;
      app.dispatch(UserAction::Invest).await;
      info!("\n{}", app.view().await);

      app.dispatch(UserAction::Withdraw).await;
      info!("\n{}", app.view().await);

      // Let a pending copy confirmation run out before leaving
      tokio::time::sleep(config.copy_status_ttl + Duration::from_millis(100)).await;

      app.dispatch(UserAction::Disconnect).await;
      info!("\n{}", app.view().await);

      info!("Shutting down...");
      Ok(())
    })
}
