//! End-to-end wallet connection lifecycle against the scripted provider.

use purevote_client::providers::WalletError;
use workflow_tests::{TestHarness, TEST_ADDRESS};

#[tokio::test]
async fn test_connect_reports_address_and_network() {
    let mut harness = TestHarness::spawn();

    harness.ctx.wallet.connect().await.unwrap();

    let connection = harness.ctx.wallet.connection();
    assert_eq!(connection.address.as_deref(), Some(TEST_ADDRESS));
    assert_eq!(connection.short_address().as_deref(), Some("0x5290...9EE7"));
    assert_eq!(connection.network(), Some("Ethereum Mainnet"));
}

#[tokio::test]
async fn test_revoked_accounts_disconnects_regardless_of_prior_state() {
    let mut harness = TestHarness::spawn();

    harness.ctx.wallet.connect().await.unwrap();
    harness.wallet.emit_chain_changed("0x2105");
    harness.wallet.emit_accounts_changed(vec![]);
    harness.ctx.poll_external_events();

    assert!(!harness.ctx.wallet.is_connected());
    assert_eq!(harness.ctx.wallet.connection().address, None);
    assert_eq!(harness.ctx.wallet.connection().chain_id, None);
}

#[tokio::test]
async fn test_account_switch_updates_address() {
    let mut harness = TestHarness::spawn();
    harness.ctx.wallet.connect().await.unwrap();

    let other = "0x8617E340B3D01FA5F11F306F4090FD50E238070D".to_string();
    harness.wallet.emit_accounts_changed(vec![other.clone()]);
    harness.ctx.poll_external_events();

    assert!(harness.ctx.wallet.is_connected());
    assert_eq!(harness.ctx.wallet.connection().address, Some(other));
}

#[tokio::test]
async fn test_unknown_chain_renders_unknown_network() {
    let mut harness = TestHarness::spawn();
    harness.ctx.wallet.connect().await.unwrap();

    harness.wallet.emit_chain_changed("0x539");
    harness.ctx.poll_external_events();

    assert_eq!(
        harness.ctx.wallet.connection().network(),
        Some("Unknown Network")
    );
}

#[tokio::test]
async fn test_switch_network_round_trip_and_failures() {
    let mut harness = TestHarness::spawn();
    harness.ctx.wallet.connect().await.unwrap();

    harness.ctx.wallet.switch_network(8453).await.unwrap();
    harness.ctx.poll_external_events();
    assert_eq!(harness.ctx.wallet.connection().network(), Some("Base"));

    harness.wallet.fail_next_switch(4902, "Unrecognized chain ID");
    assert_eq!(
        harness.ctx.wallet.switch_network(11155111).await,
        Err(WalletError::UnrecognizedChain)
    );

    // The failed switch leaves the connection untouched.
    assert_eq!(harness.ctx.wallet.connection().network(), Some("Base"));
}

#[tokio::test]
async fn test_reconnect_is_user_initiated() {
    let mut harness = TestHarness::spawn();

    harness.ctx.wallet.connect().await.unwrap();
    harness.ctx.wallet.disconnect();
    assert!(!harness.ctx.wallet.is_connected());

    // Provider events no longer reach a disconnected manager.
    harness.wallet.emit_chain_changed("0x2105");
    harness.ctx.poll_external_events();
    assert!(!harness.ctx.wallet.is_connected());
    assert_eq!(harness.ctx.wallet.connection().chain_id, None);

    harness.ctx.wallet.connect().await.unwrap();
    assert!(harness.ctx.wallet.is_connected());
}
