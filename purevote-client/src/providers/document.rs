//! Document store contract - keyed profile records owned by an external
//! backend.

use crate::models::UserProfile;
use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("profile not found for user {0}")]
    NotFound(String),

    #[error("document store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn write_profile(&self, user_id: &str, profile: &UserProfile)
        -> Result<(), StoreError>;

    async fn read_profile(&self, user_id: &str) -> Result<UserProfile, StoreError>;
}

/// In-memory document store for tests and the offline demo.
#[derive(Default)]
pub struct MemoryDocumentStore {
    profiles: DashMap<String, UserProfile>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn write_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        self.profiles.insert(user_id.to_string(), profile.clone());
        tracing::debug!(user_id = %user_id, "Profile written");
        Ok(())
    }

    async fn read_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.profiles
            .get(user_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| StoreError::NotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let store = MemoryDocumentStore::new();
        let profile = UserProfile::from_signup("Ada", "Obi", "ada@example.com");

        store.write_profile("uid-1", &profile).await.unwrap();
        let read = store.read_profile("uid-1").await.unwrap();
        assert_eq!(read, profile);
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let store = MemoryDocumentStore::new();
        assert_eq!(
            store.read_profile("uid-404").await,
            Err(StoreError::NotFound("uid-404".to_string()))
        );
    }
}
