//! Cross-component workflow integration tests library.
//!
//! Builds a full [`AppContext`] over the in-memory providers, keeping a
//! handle on every collaborator so suites can drive provider-side events
//! and assert on traffic.

use purevote_client::config::ClientConfig;
use purevote_client::providers::{
    MemoryDocumentStore, MockIdentityProvider, MockWalletProvider, StubMembershipVerifier,
};
use purevote_client::{AppContext, Providers};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

pub const TEST_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

static INIT_LOGGING: Once = Once::new();

/// Install the tracing subscriber once per test binary.
pub fn init_test_logging() {
    INIT_LOGGING
        .call_once(|| client_core::observability::init_tracing("workflow-tests", "error"));
}

/// A fully wired application context plus handles on its collaborators.
pub struct TestHarness {
    pub ctx: AppContext,
    pub identity: Arc<MockIdentityProvider>,
    pub documents: Arc<MemoryDocumentStore>,
    pub wallet: Arc<MockWalletProvider>,
    pub membership: Arc<StubMembershipVerifier>,
    reloads: Arc<AtomicUsize>,
}

impl TestHarness {
    /// Spawn a context over fresh in-memory providers. The theme file
    /// lands in a per-harness temp location so suites stay independent.
    pub fn spawn() -> Self {
        init_test_logging();

        let identity = Arc::new(MockIdentityProvider::new());
        let documents = Arc::new(MemoryDocumentStore::new());
        let wallet = Arc::new(MockWalletProvider::new(
            vec![TEST_ADDRESS.to_string()],
            "0x1",
        ));
        let membership = Arc::new(StubMembershipVerifier::new());

        let config = ClientConfig {
            service_name: "purevote-client-test".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "error".to_string(),
            identity: None,
            theme_path: test_theme_path(),
        };

        let mut ctx = AppContext::init(
            config,
            Providers {
                identity: Some(identity.clone()),
                documents: Some(documents.clone()),
                wallet: Some(wallet.clone()),
                membership: membership.clone(),
            },
        );

        let reloads = Arc::new(AtomicUsize::new(0));
        let counter = reloads.clone();
        ctx.join.set_reload_hook(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tracing::debug!("Test harness ready");

        Self {
            ctx,
            identity,
            documents,
            wallet,
            membership,
            reloads,
        }
    }

    /// How many times the organization view reload hook has fired.
    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

fn test_theme_path() -> PathBuf {
    std::env::temp_dir()
        .join("purevote-workflow-tests")
        .join(format!("theme-{}.json", uuid::Uuid::new_v4()))
}
