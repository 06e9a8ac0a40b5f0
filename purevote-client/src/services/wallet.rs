//! Wallet connection manager. Purely local state over the injected
//! provider; nothing survives a reload.

use crate::models::wallet::parse_chain_id;
use crate::models::{WalletConnection, WalletEvent};
use crate::providers::{WalletError, WalletProvider};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

pub struct WalletManager {
    /// `None` when the environment has no injected wallet.
    provider: Option<Arc<dyn WalletProvider>>,
    connection: WalletConnection,
    /// Live subscription to provider events; dropped on disconnect.
    events: Option<broadcast::Receiver<WalletEvent>>,
}

impl WalletManager {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            connection: WalletConnection::default(),
            events: None,
        }
    }

    pub fn connection(&self) -> &WalletConnection {
        &self.connection
    }

    pub fn is_connected(&self) -> bool {
        self.connection.connected
    }

    /// Request account access and the active chain, then subscribe to
    /// provider events. Fails fast when no wallet is injected.
    pub async fn connect(&mut self) -> Result<(), WalletError> {
        if self.connection.connected {
            return Ok(());
        }
        let provider = self
            .provider
            .as_ref()
            .ok_or(WalletError::NoProvider)?
            .clone();

        let accounts = provider.request_accounts().await?;
        let address = accounts.first().ok_or(WalletError::NoAccounts)?.clone();

        let chain_hex = provider.request_chain_id().await?;
        let chain_id =
            parse_chain_id(&chain_hex).ok_or_else(|| WalletError::BadChainId(chain_hex))?;

        self.events = Some(provider.subscribe_events());
        self.connection = WalletConnection {
            connected: true,
            address: Some(address),
            chain_id: Some(chain_id),
        };

        tracing::info!(
            address = %self.connection.short_address().unwrap_or_default(),
            chain_id = chain_id,
            "Wallet connected"
        );
        Ok(())
    }

    /// Drop the event subscription and reset local state. No on-chain
    /// action is taken.
    pub fn disconnect(&mut self) {
        if self.connection.connected {
            tracing::info!("Wallet disconnected");
        }
        self.events = None;
        self.connection = WalletConnection::default();
    }

    /// Drain pending provider events and apply them.
    pub fn process_events(&mut self) {
        loop {
            let Some(events) = self.events.as_mut() else {
                return;
            };
            match events.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return,
                // Dropped events only ever carry stale addresses/chains,
                // so skip ahead to the live ones.
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed = missed, "Wallet event stream lagged");
                }
            }
        }
    }

    fn handle_event(&mut self, event: WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.first() {
                None => self.disconnect(),
                Some(address) => {
                    tracing::info!(address = %address, "Active account changed");
                    self.connection.address = Some(address.clone());
                }
            },
            WalletEvent::ChainChanged(hex) => match parse_chain_id(&hex) {
                Some(chain_id) => {
                    tracing::info!(chain_id = chain_id, "Active chain changed");
                    self.connection.chain_id = Some(chain_id);
                }
                None => tracing::warn!(chain = %hex, "Ignoring unparseable chain id"),
            },
        }
    }

    /// Ask the wallet to switch networks. A wallet that does not know the
    /// chain reports a distinct error telling the user to add it first;
    /// nothing is retried.
    pub async fn switch_network(&self, chain_id: u64) -> Result<(), WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::NoProvider)?;
        provider
            .switch_chain(&format!("{:#x}", chain_id))
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, chain_id = chain_id, "Network switch failed");
                err
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockWalletProvider;

    fn manager_with_mock() -> (WalletManager, Arc<MockWalletProvider>) {
        let provider = Arc::new(MockWalletProvider::new(
            vec!["0x52908400098527886E0F7030069857D2E4169EE7".to_string()],
            "0x1",
        ));
        let manager = WalletManager::new(Some(provider.clone()));
        (manager, provider)
    }

    #[tokio::test]
    async fn test_connect_without_provider_fails_fast() {
        let mut manager = WalletManager::new(None);
        assert_eq!(manager.connect().await, Err(WalletError::NoProvider));
        assert!(!manager.is_connected());
    }

    #[tokio::test]
    async fn test_connect_populates_connection() {
        let (mut manager, _provider) = manager_with_mock();
        manager.connect().await.unwrap();

        assert!(manager.is_connected());
        assert_eq!(
            manager.connection().short_address().as_deref(),
            Some("0x5290...9EE7")
        );
        assert_eq!(manager.connection().network(), Some("Ethereum Mainnet"));
    }

    #[tokio::test]
    async fn test_empty_accounts_event_disconnects() {
        let (mut manager, provider) = manager_with_mock();
        manager.connect().await.unwrap();

        provider.emit_accounts_changed(vec![]);
        manager.process_events();

        assert!(!manager.is_connected());
        assert_eq!(manager.connection().address, None);
    }

    #[tokio::test]
    async fn test_chain_changed_updates_network() {
        let (mut manager, provider) = manager_with_mock();
        manager.connect().await.unwrap();

        provider.emit_chain_changed("0x539");
        manager.process_events();
        assert_eq!(manager.connection().network(), Some("Unknown Network"));

        provider.emit_chain_changed("0x2105");
        manager.process_events();
        assert_eq!(manager.connection().network(), Some("Base"));
    }

    #[tokio::test]
    async fn test_switch_to_unknown_chain_is_distinct() {
        let (mut manager, provider) = manager_with_mock();
        manager.connect().await.unwrap();

        provider.fail_next_switch(4902, "Unrecognized chain ID");
        assert_eq!(
            manager.switch_network(8453).await,
            Err(WalletError::UnrecognizedChain)
        );

        provider.fail_next_switch(4001, "User rejected the request.");
        let err = manager.switch_network(8453).await.unwrap_err();
        assert!(matches!(err, WalletError::Provider { code: 4001, .. }));
    }
}
