//! Agency membership roles and user types.
//!
//! These must match the CHECK constraints in
//! `20261001000002_create_agency_members_table.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Permission level a member holds inside an agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Parse a role string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: admin, editor, viewer"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

// ---------------------------------------------------------------------------
// User type
// ---------------------------------------------------------------------------

/// Which side of the relationship a member sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Agency,
    Client,
    Freelance,
}

impl UserType {
    /// Parse a user type string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "agency" => Ok(Self::Agency),
            "client" => Ok(Self::Client),
            "freelance" => Ok(Self::Freelance),
            _ => Err(CoreError::Validation(format!(
                "Invalid user type '{s}'. Must be one of: agency, client, freelance"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agency => "agency",
            Self::Client => "client",
            Self::Freelance => "freelance",
        }
    }
}

// ---------------------------------------------------------------------------
// Membership status
// ---------------------------------------------------------------------------

/// Lifecycle of an agency membership row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Pending,
    Approved,
    Rejected,
}

impl MembershipStatus {
    /// Parse a membership status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid membership status '{s}'. Must be one of: pending, approved, rejected"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// The (role, user type) pair the proposal policy is evaluated against.
///
/// Never persisted; derived per request from the caller's membership in the
/// project's agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub role: Role,
    pub user_type: UserType,
}

impl Actor {
    pub fn new(role: Role, user_type: UserType) -> Self {
        Self { role, user_type }
    }
}

/// A caller's membership in one agency, as read from the project store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub agency_id: crate::types::DbId,
    pub role: Role,
    pub user_type: UserType,
    pub status: MembershipStatus,
}

impl Membership {
    /// The actor this membership grants, or `None` unless it is approved.
    pub fn actor(&self) -> Option<Actor> {
        (self.status == MembershipStatus::Approved).then(|| Actor::new(self.role, self.user_type))
    }
}
