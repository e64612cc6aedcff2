//! Agency membership rules: join-request defaults, effective role, and how
//! a user's memberships are grouped on the dashboard.

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::{MembershipStatus, Role, UserType};
use crate::types::DbId;

/// User type given to someone who asks to join an agency.
pub const JOIN_REQUEST_USER_TYPE: UserType = UserType::Client;

/// Permission level given to someone who asks to join an agency.
pub const JOIN_REQUEST_PERMISSION: Role = Role::Viewer;

/// Status of a freshly created join request.
pub const JOIN_REQUEST_STATUS: MembershipStatus = MembershipStatus::Pending;

/// Maximum length of an agency name.
pub const MAX_AGENCY_NAME_LENGTH: usize = 200;

/// How a membership row is shown to its user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipKind {
    /// Approved; grants an actor in the agency.
    Active,
    /// Pending and created by the user themselves.
    JoinRequest,
    /// Pending and created by another member.
    Invitation,
    Rejected,
}

/// Classify a membership by its status and whether someone invited the user.
pub fn classify(status: MembershipStatus, invited_by: Option<DbId>) -> MembershipKind {
    match (status, invited_by) {
        (MembershipStatus::Approved, _) => MembershipKind::Active,
        (MembershipStatus::Rejected, _) => MembershipKind::Rejected,
        (MembershipStatus::Pending, None) => MembershipKind::JoinRequest,
        (MembershipStatus::Pending, Some(_)) => MembershipKind::Invitation,
    }
}

/// The role a member acts with: an explicit override if set, else their
/// permission level.
pub fn effective_role(permission_level: Role, role_override: Option<Role>) -> Role {
    role_override.unwrap_or(permission_level)
}

/// Validate an agency name: required, trimmed, bounded.
pub fn validate_agency_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }
    if trimmed.chars().count() > MAX_AGENCY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Agency name exceeds maximum length of {MAX_AGENCY_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
