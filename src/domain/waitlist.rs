use crate::domain::contact_name::ContactName;
use crate::domain::email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// The closed set of reasons a visitor can pick when joining the waitlist.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum WaitlistUseCase {
    Personal,
    Business,
    Research,
    #[default]
    Other,
}

impl WaitlistUseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistUseCase::Personal => "Personal",
            WaitlistUseCase::Business => "Business",
            WaitlistUseCase::Research => "Research",
            WaitlistUseCase::Other => "Other",
        }
    }
}

impl std::fmt::Display for WaitlistUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review states a waitlist entry moves through on the backend side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WaitlistStatus {
    Pending,
    Contacted,
    Approved,
    Rejected,
}

impl WaitlistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistStatus::Pending => "pending",
            WaitlistStatus::Contacted => "contacted",
            WaitlistStatus::Approved => "approved",
            WaitlistStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated waitlist signup, ready to be forwarded.
pub struct NewWaitlistEntry {
    pub name: ContactName,
    pub email: EmailAddress,
    pub use_case: WaitlistUseCase,
    pub message: Option<String>,
}

/// Partial update applied to a waitlist entry by an administrator.
/// Absent fields stay untouched on the backend side.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WaitlistStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}
