//! Shared helpers for integration tests: counting wrappers around the
//! in-memory providers so call traffic can be asserted.

#![allow(dead_code)]

use async_trait::async_trait;
use purevote_client::models::{AuthUser, UserProfile};
use purevote_client::providers::{
    AuthStateReceiver, DocumentStore, IdentityError, IdentityProvider, MemoryDocumentStore,
    MockIdentityProvider, StoreError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Identity provider wrapper that counts every backend call.
pub struct CountingIdentity {
    pub inner: Arc<MockIdentityProvider>,
    calls: AtomicUsize,
}

impl CountingIdentity {
    pub fn new(inner: Arc<MockIdentityProvider>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for CountingIdentity {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, IdentityError> {
        self.bump();
        self.inner.create_account(email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        self.bump();
        self.inner.sign_in(email, password).await
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.bump();
        self.inner.sign_out().await
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        self.bump();
        self.inner.send_password_reset(email).await
    }

    async fn update_display_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<(), IdentityError> {
        self.bump();
        self.inner.update_display_name(user_id, name).await
    }

    fn subscribe_auth_state(&self) -> AuthStateReceiver {
        self.inner.subscribe_auth_state()
    }
}

/// Document store wrapper that counts profile writes.
pub struct CountingStore {
    pub inner: MemoryDocumentStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryDocumentStore::new(),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn write_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write_profile(user_id, profile).await
    }

    async fn read_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.inner.read_profile(user_id).await
    }
}
