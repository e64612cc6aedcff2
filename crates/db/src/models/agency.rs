//! Agency and agency membership models.

use agencyhub_core::error::CoreError;
use agencyhub_core::membership::{classify, effective_role, MembershipKind};
use agencyhub_core::roles::{Membership, MembershipStatus, Role, UserType};
use agencyhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `agencies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Agency {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new agency.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAgency {
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `agency_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AgencyMember {
    pub id: DbId,
    pub agency_id: DbId,
    pub user_id: DbId,
    pub user_type: String,
    pub permission_level: String,
    /// Explicit role override; `permission_level` applies when unset.
    pub role: Option<String>,
    pub status: String,
    pub invited_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AgencyMember {
    /// Parse the row into the core membership used to derive an actor.
    pub fn to_membership(&self) -> Result<Membership, CoreError> {
        let permission_level = Role::from_str_db(&self.permission_level)?;
        let role_override = self.role.as_deref().map(Role::from_str_db).transpose()?;

        Ok(Membership {
            agency_id: self.agency_id,
            role: effective_role(permission_level, role_override),
            user_type: UserType::from_str_db(&self.user_type)?,
            status: MembershipStatus::from_str_db(&self.status)?,
        })
    }
}

/// DTO for inserting a membership row.
#[derive(Debug, Clone)]
pub struct CreateAgencyMember {
    pub agency_id: DbId,
    pub user_id: DbId,
    pub user_type: UserType,
    pub permission_level: Role,
    pub status: MembershipStatus,
    pub invited_by: Option<DbId>,
}

/// A user's membership joined with the agency name, for dashboard listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserMembership {
    pub id: DbId,
    pub agency_id: DbId,
    pub agency_name: String,
    pub user_type: String,
    pub permission_level: String,
    pub role: Option<String>,
    pub status: String,
    pub invited_by: Option<DbId>,
    pub created_at: Timestamp,
}

impl UserMembership {
    pub fn kind(&self) -> Result<MembershipKind, CoreError> {
        let status = MembershipStatus::from_str_db(&self.status)?;
        Ok(classify(status, self.invited_by))
    }
}

/// A user's memberships grouped the way the dashboard shows them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedMemberships {
    pub active: Vec<UserMembership>,
    pub requests: Vec<UserMembership>,
    pub invitations: Vec<UserMembership>,
    pub rejected: Vec<UserMembership>,
}

impl GroupedMemberships {
    /// Sort memberships into their groups, preserving input order.
    pub fn group(memberships: Vec<UserMembership>) -> Result<Self, CoreError> {
        let mut grouped = Self::default();
        for membership in memberships {
            match membership.kind()? {
                MembershipKind::Active => grouped.active.push(membership),
                MembershipKind::JoinRequest => grouped.requests.push(membership),
                MembershipKind::Invitation => grouped.invitations.push(membership),
                MembershipKind::Rejected => grouped.rejected.push(membership),
            }
        }
        Ok(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_row(permission_level: &str, role: Option<&str>, status: &str) -> AgencyMember {
        let now = chrono::Utc::now();
        AgencyMember {
            id: 1,
            agency_id: 2,
            user_id: 3,
            user_type: "agency".to_string(),
            permission_level: permission_level.to_string(),
            role: role.map(str::to_string),
            status: status.to_string(),
            invited_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn user_membership(status: &str, invited_by: Option<DbId>) -> UserMembership {
        UserMembership {
            id: 1,
            agency_id: 2,
            agency_name: "Northwind".to_string(),
            user_type: "client".to_string(),
            permission_level: "viewer".to_string(),
            role: None,
            status: status.to_string(),
            invited_by,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn role_column_overrides_permission_level() {
        let membership = member_row("viewer", Some("admin"), "approved")
            .to_membership()
            .unwrap();
        assert_eq!(membership.role, Role::Admin);
        assert_eq!(membership.user_type, UserType::Agency);
    }

    #[test]
    fn permission_level_applies_without_override() {
        let membership = member_row("editor", None, "pending").to_membership().unwrap();
        assert_eq!(membership.role, Role::Editor);
        assert_eq!(membership.status, MembershipStatus::Pending);
    }

    #[test]
    fn bad_column_value_is_an_error() {
        assert!(member_row("owner", None, "approved").to_membership().is_err());
    }

    #[test]
    fn memberships_are_grouped_for_dashboard() {
        let grouped = GroupedMemberships::group(vec![
            user_membership("approved", None),
            user_membership("pending", None),
            user_membership("pending", Some(9)),
            user_membership("rejected", Some(9)),
            user_membership("pending", None),
        ])
        .unwrap();
        assert_eq!(grouped.active.len(), 1);
        assert_eq!(grouped.requests.len(), 2);
        assert_eq!(grouped.invitations.len(), 1);
        assert_eq!(grouped.rejected.len(), 1);
    }
}
