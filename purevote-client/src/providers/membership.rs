//! Membership verification contract for the organization join flow.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("The verification code is not valid.")]
    CodeRejected,

    #[error("membership service error: {0}")]
    Backend(String),
}

/// Sends and checks the one-time codes used to verify a joining member's
/// email.
#[async_trait]
pub trait MembershipVerifier: Send + Sync {
    async fn send_code(&self, email: &str) -> Result<(), MembershipError>;

    async fn confirm_code(&self, email: &str, code: &str) -> Result<(), MembershipError>;
}

/// Stand-in verifier. The backing service does not check submitted codes
/// yet, so this accepts every submission; it exists to keep the call an
/// explicit external contract rather than a hardwired success.
#[derive(Default)]
pub struct StubMembershipVerifier {
    sends: AtomicUsize,
}

impl StubMembershipVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many codes have been requested, including resends.
    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MembershipVerifier for StubMembershipVerifier {
    async fn send_code(&self, email: &str) -> Result<(), MembershipError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        tracing::info!(email = %email, "Verification code requested");
        Ok(())
    }

    async fn confirm_code(&self, email: &str, code: &str) -> Result<(), MembershipError> {
        tracing::info!(email = %email, code_len = code.len(), "Verification code accepted");
        Ok(())
    }
}
