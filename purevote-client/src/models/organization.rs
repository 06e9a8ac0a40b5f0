//! Organization directory entries and the in-progress join request.

use serde::{Deserialize, Serialize};

/// Number of characters in the emailed one-time code.
pub const CODE_LENGTH: usize = 6;

/// Directory entry for an organization running elections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: OrgKind,
    pub elections: u32,
    pub members: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgKind {
    Academic,
    Corporate,
}

/// Role a member claims when applying to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Student,
    Employee,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Student => "student",
            MemberRole::Employee => "employee",
        }
    }
}

/// Stage of the join flow. Strictly linear, `Verified` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStage {
    #[default]
    Form,
    Verifying,
    Verified,
}

/// One in-progress application to join an organization. A single request
/// is live at a time; dismissing the flow discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub organization_id: String,
    pub full_name: String,
    pub role: Option<MemberRole>,
    pub email: String,
    pub code: [Option<char>; CODE_LENGTH],
    pub stage: JoinStage,
}

impl JoinRequest {
    pub fn new(organization_id: &str) -> Self {
        Self {
            organization_id: organization_id.to_string(),
            full_name: String::new(),
            role: None,
            email: String::new(),
            code: [None; CODE_LENGTH],
            stage: JoinStage::Form,
        }
    }

    /// All form fields filled in, so the form may be submitted.
    pub fn is_form_complete(&self) -> bool {
        !self.full_name.is_empty() && self.role.is_some() && !self.email.is_empty()
    }

    /// The entered code, once every position holds a character.
    pub fn code_string(&self) -> Option<String> {
        self.code.iter().copied().collect()
    }
}
