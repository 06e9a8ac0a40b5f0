use client_core::observability::logging::init_tracing;
use purevote_client::{
    config::ClientConfig,
    models::{AuthPage, MemberRole, SignupForm},
    providers::{
        DocumentStore, IdentityProvider, MemoryDocumentStore, MockIdentityProvider,
        MockWalletProvider, RestIdentityProvider, RestIdentitySettings,
        StubMembershipVerifier, WalletProvider,
    },
    AppContext, Providers,
};
use std::sync::Arc;

/// Scripted walkthrough of the client workflows: sign up, connect a
/// wallet, join an organization. With IDENTITY_API_URL/IDENTITY_API_KEY
/// set it talks to the real identity backend; otherwise it runs against
/// the in-memory providers.
#[tokio::main]
async fn main() -> Result<(), client_core::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = ClientConfig::from_env()?;

    init_tracing(&config.service_name, &config.log_level);

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        "Starting PureVote client demo"
    );

    let identity: Arc<dyn IdentityProvider> = match &config.identity {
        Some(settings) => Arc::new(RestIdentityProvider::new(RestIdentitySettings {
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        })),
        None => {
            tracing::info!("No identity backend configured, using the in-memory provider");
            Arc::new(MockIdentityProvider::new())
        }
    };
    let documents: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
    let wallet: Arc<dyn WalletProvider> = Arc::new(MockWalletProvider::new(
        vec!["0x52908400098527886E0F7030069857D2E4169EE7".to_string()],
        "0x1",
    ));

    let mut ctx = AppContext::init(
        config,
        Providers {
            identity: Some(identity),
            documents: Some(documents),
            wallet: Some(wallet),
            membership: Arc::new(StubMembershipVerifier::new()),
        },
    );

    // Sign up and land on the dashboard.
    ctx.session.switch_page(AuthPage::Signup);
    let form = SignupForm::new(
        "Ada",
        "Obi",
        "ada@example.com",
        "Str0ng!pass1",
        "Str0ng!pass1",
        true,
    );
    ctx.session.submit_signup(&form).await;
    tracing::info!(status = ?ctx.session.signup_status(), "Signup settled");

    // Connect the wallet and switch to Base.
    if let Err(err) = ctx.wallet.connect().await {
        tracing::warn!(error = %err, "Wallet connection failed");
    } else {
        ctx.wallet.switch_network(8453).await.ok();
        ctx.wallet.process_events();
        tracing::info!(network = ?ctx.wallet.connection().network(), "Wallet ready");
    }

    // Walk the join flow for one organization.
    ctx.join.open("babcock")?;
    ctx.join.set_full_name("Ada Obi")?;
    ctx.join.set_role(MemberRole::Student)?;
    ctx.join.set_email("ada@babcock.edu.ng")?;
    ctx.join.request_verification().await?;
    for (i, c) in "482910".chars().enumerate() {
        ctx.join.set_code_digit(i, c)?;
    }
    ctx.join.confirm().await?;
    ctx.join.dismiss_completed();

    let theme = ctx.toggle_theme();
    tracing::info!(theme = ?theme, "Theme toggled");

    ctx.sign_out().await;
    ctx.teardown();
    Ok(())
}
