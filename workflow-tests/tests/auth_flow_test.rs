//! End-to-end authentication lifecycle across the application context.

use purevote_client::models::{AuthStatus, MemberRole, SignupForm};
use purevote_client::providers::DocumentStore;
use workflow_tests::TestHarness;

fn signup_form() -> SignupForm {
    SignupForm::new(
        "Ada",
        "Obi",
        "ada@example.com",
        "Str0ng!pass1",
        "Str0ng!pass1",
        true,
    )
}

#[tokio::test]
async fn test_signup_then_sign_in_round_trip() {
    let mut harness = TestHarness::spawn();

    harness.ctx.session.submit_signup(&signup_form()).await;
    assert!(harness.ctx.session.state().is_authenticated());

    let user_id = harness.ctx.session.session().unwrap().user_id.clone();
    let profile = harness.documents.read_profile(&user_id).await.unwrap();
    assert_eq!(profile.display_name, "Ada Obi");
    assert_eq!(profile.email, "ada@example.com");

    harness.ctx.sign_out().await;
    assert!(!harness.ctx.session.state().is_authenticated());

    harness
        .ctx
        .session
        .submit_login("ada@example.com", "Str0ng!pass1")
        .await;
    assert_eq!(
        harness.ctx.session.login_status(),
        &AuthStatus::Succeeded("Welcome back, ada@example.com!".to_string())
    );
}

#[tokio::test]
async fn test_sign_out_clears_wallet_and_join_state() {
    let mut harness = TestHarness::spawn();

    harness.ctx.session.submit_signup(&signup_form()).await;
    harness.ctx.wallet.connect().await.unwrap();
    harness.ctx.join.open("babcock").unwrap();
    harness.ctx.join.set_full_name("Ada Obi").unwrap();
    harness.ctx.join.set_role(MemberRole::Student).unwrap();

    harness.ctx.sign_out().await;

    assert!(!harness.ctx.session.state().is_authenticated());
    assert!(!harness.ctx.wallet.is_connected());
    assert!(harness.ctx.join.active().is_none());
}

#[tokio::test]
async fn test_external_invalidation_clears_user_state() {
    let mut harness = TestHarness::spawn();

    harness.ctx.session.submit_signup(&signup_form()).await;
    harness.ctx.wallet.connect().await.unwrap();
    harness.ctx.join.open("babcock").unwrap();

    // Backend kills the session without a local sign-out.
    harness.identity.invalidate_session();
    harness.ctx.poll_external_events();

    assert!(!harness.ctx.session.state().is_authenticated());
    assert!(!harness.ctx.wallet.is_connected());
    assert!(harness.ctx.join.active().is_none());
}

#[tokio::test]
async fn test_theme_toggle_persists_across_contexts() {
    use purevote_client::services::{Theme, ThemeStore};

    let mut harness = TestHarness::spawn();
    let theme_path = harness.ctx.config.theme_path.clone();

    assert_eq!(harness.ctx.theme(), Theme::Light);
    assert_eq!(harness.ctx.toggle_theme(), Theme::Dark);
    harness.ctx.teardown();

    // A context built over the same preference file starts dark.
    assert_eq!(ThemeStore::new(&theme_path).load(), Theme::Dark);
}
