//! Proposal and project status enumerations.
//!
//! Database and wire spellings are the human-readable strings used by the
//! dashboard (`"on development"`, not `on_development`). They must match the
//! CHECK constraints in `20261001000003_create_projects_table.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Proposal status
// ---------------------------------------------------------------------------

/// Where a project's proposal sits in the review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    #[serde(rename = "requested")]
    Requested,
    #[serde(rename = "on development")]
    OnDevelopment,
    #[serde(rename = "on approval")]
    OnApproval,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "declined")]
    Declined,
}

/// Every proposal status, in workflow order.
pub const ALL_PROPOSAL_STATUSES: [ProposalStatus; 5] = [
    ProposalStatus::Requested,
    ProposalStatus::OnDevelopment,
    ProposalStatus::OnApproval,
    ProposalStatus::Approved,
    ProposalStatus::Declined,
];

impl ProposalStatus {
    /// Parse a proposal status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "requested" => Ok(Self::Requested),
            "on development" => Ok(Self::OnDevelopment),
            "on approval" => Ok(Self::OnApproval),
            "approved" => Ok(Self::Approved),
            "declined" => Ok(Self::Declined),
            _ => Err(CoreError::Validation(format!(
                "Invalid proposal status '{s}'. Must be one of: requested, on development, \
                 on approval, approved, declined"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::OnDevelopment => "on development",
            Self::OnApproval => "on approval",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }

    /// `approved` ends the workflow. `declined` can still be revived.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Display tone for status badges.
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Requested => StatusTone::Yellow,
            Self::OnDevelopment => StatusTone::Blue,
            Self::OnApproval => StatusTone::Purple,
            Self::Approved => StatusTone::Green,
            Self::Declined => StatusTone::Red,
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status tone
// ---------------------------------------------------------------------------

/// Badge colour for a proposal status. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Yellow,
    Blue,
    Purple,
    Green,
    Red,
    Gray,
}

impl StatusTone {
    /// Utility classes the dashboard applies to the badge.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Yellow => "bg-yellow-100 text-yellow-800",
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Red => "bg-red-100 text-red-800",
            Self::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

/// Tone for a raw status string. Unrecognised values get the neutral tone.
pub fn tone_for_str(s: &str) -> StatusTone {
    ProposalStatus::from_str_db(s)
        .map(|status| status.tone())
        .unwrap_or(StatusTone::Gray)
}

// ---------------------------------------------------------------------------
// Proposal action
// ---------------------------------------------------------------------------

/// An action a user may take on a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalAction {
    Approve,
    Decline,
    Send,
    Create,
    Update,
}

impl ProposalAction {
    /// Parse an action name.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "approve" => Ok(Self::Approve),
            "decline" => Ok(Self::Decline),
            "send" => Ok(Self::Send),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            _ => Err(CoreError::Validation(format!(
                "Invalid proposal action '{s}'. \
                 Must be one of: approve, decline, send, create, update"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Decline => "decline",
            Self::Send => "send",
            Self::Create => "create",
            Self::Update => "update",
        }
    }

    /// Button label shown next to a proposal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Decline => "Decline",
            Self::Send => "Send",
            Self::Create => "Create",
            Self::Update => "Update",
        }
    }
}

impl std::fmt::Display for ProposalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

/// Overall project lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Proposal,
    Planning,
    Ongoing,
    Finished,
}

impl ProjectStatus {
    /// Parse a project status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "proposal" => Ok(Self::Proposal),
            "planning" => Ok(Self::Planning),
            "ongoing" => Ok(Self::Ongoing),
            "finished" => Ok(Self::Finished),
            _ => Err(CoreError::Validation(format!(
                "Invalid project status '{s}'. \
                 Must be one of: proposal, planning, ongoing, finished"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposal => "proposal",
            Self::Planning => "planning",
            Self::Ongoing => "ongoing",
            Self::Finished => "finished",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
