//! Wallet provider contract - the browser-injected account/chain
//! interface and its event stream.

use crate::models::WalletEvent;
use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use tokio::sync::broadcast;

/// Provider error code for a chain the wallet does not know about.
pub const CHAIN_NOT_ADDED: i64 = 4902;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet is injected into the execution environment.
    #[error("No wallet provider detected. Please install a browser wallet.")]
    NoProvider,

    /// The provider returned no accounts.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// The provider reported a chain id the client cannot parse.
    #[error("Unparseable chain id: {0}")]
    BadChainId(String),

    /// The requested chain is not configured in the wallet.
    #[error("This network needs to be added to your wallet first.")]
    UnrecognizedChain,

    /// Any other provider-reported failure, surfaced with its own text.
    #[error("{message}")]
    Provider { code: i64, message: String },
}

impl WalletError {
    /// Map a provider error code onto the distinguished cases.
    pub fn from_provider(code: i64, message: String) -> Self {
        if code == CHAIN_NOT_ADDED {
            WalletError::UnrecognizedChain
        } else {
            WalletError::Provider { code, message }
        }
    }
}

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access; the first entry is the active account.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Active chain id as a hex string ("0x1").
    async fn request_chain_id(&self) -> Result<String, WalletError>;

    /// Ask the wallet to switch to the given hex-encoded chain id.
    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletError>;

    /// Subscribe to account/chain change events. Dropping the receiver
    /// unsubscribes.
    fn subscribe_events(&self) -> broadcast::Receiver<WalletEvent>;
}

/// Scripted wallet provider for tests and the offline demo.
pub struct MockWalletProvider {
    accounts: Mutex<Vec<String>>,
    chain_id_hex: Mutex<String>,
    /// Error the next `switch_chain` call should fail with, if any.
    switch_failure: Mutex<Option<(i64, String)>>,
    events: broadcast::Sender<WalletEvent>,
}

impl MockWalletProvider {
    pub fn new(accounts: Vec<String>, chain_id_hex: &str) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: Mutex::new(accounts),
            chain_id_hex: Mutex::new(chain_id_hex.to_string()),
            switch_failure: Mutex::new(None),
            events,
        }
    }

    /// Make the next `switch_chain` call fail with the given code.
    pub fn fail_next_switch(&self, code: i64, message: &str) {
        *self.switch_failure.lock().unwrap() = Some((code, message.to_string()));
    }

    /// Emit an accounts-changed event as the wallet extension would.
    pub fn emit_accounts_changed(&self, accounts: Vec<String>) {
        *self.accounts.lock().unwrap() = accounts.clone();
        let _ = self.events.send(WalletEvent::AccountsChanged(accounts));
    }

    /// Emit a chain-changed event as the wallet extension would.
    pub fn emit_chain_changed(&self, chain_id_hex: &str) {
        *self.chain_id_hex.lock().unwrap() = chain_id_hex.to_string();
        let _ = self
            .events
            .send(WalletEvent::ChainChanged(chain_id_hex.to_string()));
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn request_chain_id(&self) -> Result<String, WalletError> {
        Ok(self.chain_id_hex.lock().unwrap().clone())
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletError> {
        if let Some((code, message)) = self.switch_failure.lock().unwrap().take() {
            return Err(WalletError::from_provider(code, message));
        }
        self.emit_chain_changed(chain_id_hex);
        Ok(())
    }

    fn subscribe_events(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}
