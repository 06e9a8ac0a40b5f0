//! Organization join workflow: a linear Form -> Verifying -> Verified
//! machine over one live join request.

use crate::catalog;
use crate::models::{JoinRequest, JoinStage, MemberRole, CODE_LENGTH};
use crate::providers::{MembershipError, MembershipVerifier};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("Unknown organization: {0}")]
    UnknownOrganization(String),

    #[error("No join request is in progress")]
    NoActiveRequest,

    #[error("This step is not available right now")]
    WrongStage,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please fill in all fields")]
    IncompleteForm,

    #[error("Please enter the full verification code")]
    IncompleteCode,

    #[error("Code position out of range")]
    BadCodePosition,

    #[error(transparent)]
    Verifier(#[from] MembershipError),
}

impl From<JoinError> for client_core::error::AppError {
    fn from(err: JoinError) -> Self {
        match err {
            JoinError::Verifier(e) => {
                client_core::error::AppError::ProviderUnavailable(e.to_string())
            }
            other => client_core::error::AppError::ValidationError(other.to_string()),
        }
    }
}

/// Hook fired when a join completes, so the organization/election view
/// can reload with the new membership.
pub type ReloadHook = Box<dyn Fn() + Send + Sync>;

pub struct JoinWorkflow {
    verifier: Arc<dyn MembershipVerifier>,
    active: Option<JoinRequest>,
    on_verified: Option<ReloadHook>,
}

impl JoinWorkflow {
    pub fn new(verifier: Arc<dyn MembershipVerifier>) -> Self {
        Self {
            verifier,
            active: None,
            on_verified: None,
        }
    }

    /// Register the view-reload hook fired once per completed join.
    pub fn set_reload_hook(&mut self, hook: ReloadHook) {
        self.on_verified = Some(hook);
    }

    pub fn active(&self) -> Option<&JoinRequest> {
        self.active.as_ref()
    }

    pub fn stage(&self) -> Option<JoinStage> {
        self.active.as_ref().map(|request| request.stage)
    }

    /// Start a join request for the given organization. Any previous
    /// request is discarded; only one is live at a time.
    pub fn open(&mut self, organization_id: &str) -> Result<(), JoinError> {
        let org = catalog::find(organization_id)
            .ok_or_else(|| JoinError::UnknownOrganization(organization_id.to_string()))?;

        tracing::info!(organization = %org.id, "Join request opened");
        self.active = Some(JoinRequest::new(org.id));
        Ok(())
    }

    /// Dismiss the flow, discarding the request. Available from `Form`
    /// and `Verifying`.
    pub fn cancel(&mut self) {
        if let Some(request) = self.active.take() {
            tracing::info!(organization = %request.organization_id, "Join request cancelled");
        }
    }

    pub fn set_full_name(&mut self, full_name: &str) -> Result<(), JoinError> {
        self.form_mut()?.full_name = full_name.to_string();
        Ok(())
    }

    pub fn set_role(&mut self, role: MemberRole) -> Result<(), JoinError> {
        self.form_mut()?.role = Some(role);
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), JoinError> {
        self.form_mut()?.email = email.to_string();
        Ok(())
    }

    /// Whether the overall form submit is enabled.
    pub fn can_submit(&self) -> bool {
        self.active
            .as_ref()
            .map(|request| request.stage == JoinStage::Form && request.is_form_complete())
            .unwrap_or(false)
    }

    /// The explicit "Verify" action on the email field: asks the backend
    /// to send a code and moves to code entry.
    pub async fn request_verification(&mut self) -> Result<(), JoinError> {
        let request = self.active.as_mut().ok_or(JoinError::NoActiveRequest)?;
        if request.stage != JoinStage::Form {
            return Err(JoinError::WrongStage);
        }
        if request.email.is_empty() {
            return Err(JoinError::MissingEmail);
        }

        self.verifier.send_code(&request.email).await?;
        request.stage = JoinStage::Verifying;
        tracing::info!(organization = %request.organization_id, "Verification code sent");
        Ok(())
    }

    /// Enter one character of the one-time code.
    pub fn set_code_digit(&mut self, index: usize, digit: char) -> Result<(), JoinError> {
        let request = self.active.as_mut().ok_or(JoinError::NoActiveRequest)?;
        if request.stage != JoinStage::Verifying {
            return Err(JoinError::WrongStage);
        }
        if index >= CODE_LENGTH {
            return Err(JoinError::BadCodePosition);
        }
        request.code[index] = Some(digit);
        Ok(())
    }

    /// Ask the backend to send the code again. Does not change stage.
    pub async fn resend_code(&mut self) -> Result<(), JoinError> {
        let request = self.active.as_ref().ok_or(JoinError::NoActiveRequest)?;
        if request.stage != JoinStage::Verifying {
            return Err(JoinError::WrongStage);
        }
        self.verifier.send_code(&request.email).await?;
        Ok(())
    }

    /// Submit the entered code. On acceptance the request is Verified
    /// (terminal) and the reload hook fires exactly once.
    pub async fn confirm(&mut self) -> Result<(), JoinError> {
        let request = self.active.as_mut().ok_or(JoinError::NoActiveRequest)?;
        if request.stage != JoinStage::Verifying {
            return Err(JoinError::WrongStage);
        }
        let code = request.code_string().ok_or(JoinError::IncompleteCode)?;

        self.verifier.confirm_code(&request.email, &code).await?;
        request.stage = JoinStage::Verified;
        tracing::info!(organization = %request.organization_id, "Join verified");

        if let Some(hook) = self.on_verified.as_ref() {
            hook();
        }
        Ok(())
    }

    /// Acknowledge the completed join and clear the request.
    pub fn dismiss_completed(&mut self) {
        if matches!(self.stage(), Some(JoinStage::Verified)) {
            self.active = None;
        }
    }

    fn form_mut(&mut self) -> Result<&mut JoinRequest, JoinError> {
        let request = self.active.as_mut().ok_or(JoinError::NoActiveRequest)?;
        if request.stage != JoinStage::Form {
            return Err(JoinError::WrongStage);
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StubMembershipVerifier;

    fn workflow() -> (JoinWorkflow, Arc<StubMembershipVerifier>) {
        let verifier = Arc::new(StubMembershipVerifier::new());
        (JoinWorkflow::new(verifier.clone()), verifier)
    }

    #[tokio::test]
    async fn test_unknown_organization_rejected() {
        let (mut flow, _) = workflow();
        assert_eq!(
            flow.open("nowhere"),
            Err(JoinError::UnknownOrganization("nowhere".to_string()))
        );
    }

    #[tokio::test]
    async fn test_submit_disabled_until_form_complete() {
        let (mut flow, _) = workflow();
        flow.open("babcock").unwrap();
        assert!(!flow.can_submit());

        flow.set_full_name("Ada Obi").unwrap();
        flow.set_role(MemberRole::Student).unwrap();
        assert!(!flow.can_submit());

        flow.set_email("ada@babcock.edu.ng").unwrap();
        assert!(flow.can_submit());
    }

    #[tokio::test]
    async fn test_verification_requires_email() {
        let (mut flow, verifier) = workflow();
        flow.open("babcock").unwrap();

        assert_eq!(
            flow.request_verification().await,
            Err(JoinError::MissingEmail)
        );
        assert_eq!(verifier.sends(), 0);

        flow.set_email("ada@babcock.edu.ng").unwrap();
        flow.request_verification().await.unwrap();
        assert_eq!(flow.stage(), Some(JoinStage::Verifying));
        assert_eq!(verifier.sends(), 1);
    }

    #[tokio::test]
    async fn test_resend_requests_another_code() {
        let (mut flow, verifier) = workflow();
        flow.open("babcock").unwrap();
        flow.set_email("ada@babcock.edu.ng").unwrap();
        flow.request_verification().await.unwrap();

        flow.resend_code().await.unwrap();
        assert_eq!(verifier.sends(), 2);
        assert_eq!(flow.stage(), Some(JoinStage::Verifying));
    }

    #[tokio::test]
    async fn test_confirm_requires_full_code() {
        let (mut flow, _) = workflow();
        flow.open("babcock").unwrap();
        flow.set_email("ada@babcock.edu.ng").unwrap();
        flow.request_verification().await.unwrap();

        for (i, c) in "4829".chars().enumerate() {
            flow.set_code_digit(i, c).unwrap();
        }
        assert_eq!(flow.confirm().await, Err(JoinError::IncompleteCode));
    }

    #[tokio::test]
    async fn test_cancel_discards_request() {
        let (mut flow, _) = workflow();
        flow.open("babcock").unwrap();
        flow.set_full_name("Ada Obi").unwrap();

        flow.cancel();
        assert!(flow.active().is_none());
        assert_eq!(flow.set_full_name("x"), Err(JoinError::NoActiveRequest));
    }
}
