//! Application context: one explicit owner for the controllers that the
//! original UI kept as page-wide globals. Lifecycle is init/teardown,
//! tied to the application root.

use crate::config::ClientConfig;
use crate::providers::{
    DocumentStore, IdentityProvider, MembershipVerifier, WalletProvider,
};
use crate::services::{
    AuthBackend, JoinWorkflow, SessionController, Theme, ThemeStore, WalletManager,
};
use std::sync::Arc;

/// External collaborators handed to [`AppContext::init`]. Identity and
/// documents must both be present for live authentication; a missing
/// wallet simply means `connect` fails fast.
pub struct Providers {
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub documents: Option<Arc<dyn DocumentStore>>,
    pub wallet: Option<Arc<dyn WalletProvider>>,
    pub membership: Arc<dyn MembershipVerifier>,
}

pub struct AppContext {
    pub config: ClientConfig,
    pub session: SessionController,
    pub wallet: WalletManager,
    pub join: JoinWorkflow,
    theme_store: ThemeStore,
    theme: Theme,
}

impl AppContext {
    pub fn init(config: ClientConfig, providers: Providers) -> Self {
        let backend = match (providers.identity, providers.documents) {
            (Some(identity), Some(documents)) => AuthBackend::Live {
                identity,
                documents,
            },
            _ => AuthBackend::Demo,
        };

        let theme_store = ThemeStore::new(&config.theme_path);
        let theme = theme_store.load();

        tracing::info!(
            service = %config.service_name,
            version = %config.service_version,
            theme = ?theme,
            "Application context initialized"
        );

        Self {
            session: SessionController::new(backend),
            wallet: WalletManager::new(providers.wallet),
            join: JoinWorkflow::new(providers.membership),
            theme_store,
            theme,
            config,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.theme_store.save(self.theme) {
            tracing::error!(error = %err, "Failed to persist theme");
        }
        self.theme
    }

    /// Sign out and drop every piece of sub-state tied to the user.
    pub async fn sign_out(&mut self) {
        self.session.sign_out().await;
        self.wallet.disconnect();
        self.join.cancel();
    }

    /// Drain provider-emitted events (auth-state stream, wallet events).
    /// If the identity backend invalidated the session externally, the
    /// user-tied sub-state is dropped as on an explicit sign-out.
    pub fn poll_external_events(&mut self) {
        let was_authenticated = self.session.state().is_authenticated();
        self.session.poll_auth_state();
        if was_authenticated && !self.session.state().is_authenticated() {
            self.wallet.disconnect();
            self.join.cancel();
        }

        self.wallet.process_events();
    }

    /// Explicit teardown: disconnect the wallet and discard any join in
    /// progress. The session itself is owned by the identity backend and
    /// survives for its own lifetime.
    pub fn teardown(mut self) {
        self.wallet.disconnect();
        self.join.cancel();
        tracing::info!("Application context torn down");
    }
}
