//! Project brief fields, fixed option lists, and validation.
//!
//! A submitted brief becomes a project in the `proposal` phase with its
//! proposal `requested`.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::proposal_status::{ProjectStatus, ProposalStatus};
use crate::types::{DbId, Timestamp};

/* --------------------------------------------------------------------------
Option lists
-------------------------------------------------------------------------- */

pub const PROJECT_TYPES: &[&str] = &[
    "Website Development",
    "Mobile App",
    "Branding",
    "UI/UX Design",
    "Marketing Campaign",
    "E-commerce",
    "Content Creation",
    "Social Media",
];

pub const HELP_TYPES: &[&str] = &[
    "I'd like to discuss project possibilities",
    "Create something new",
    "Revamp, refine, or edit some existing project",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000 - $100,000",
    "Over $100,000",
];

/// Overall status a fresh brief starts in.
pub const INITIAL_PROJECT_STATUS: ProjectStatus = ProjectStatus::Proposal;

/// Proposal status a fresh brief starts in.
pub const INITIAL_PROPOSAL_STATUS: ProposalStatus = ProposalStatus::Requested;

/* --------------------------------------------------------------------------
Brief
-------------------------------------------------------------------------- */

/// A project brief as submitted by a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectBrief {
    pub agency_id: DbId,

    #[validate(length(min = 2, message = "Project name must be at least 2 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_project_type"))]
    pub project_type: String,

    #[validate(length(min = 10, message = "Please provide more detail about your goals"))]
    pub goals: String,

    #[validate(custom(function = "validate_help_type"))]
    pub help_type: String,

    #[validate(length(min = 20, message = "Please provide a more detailed description"))]
    pub description: String,

    #[validate(custom(function = "validate_budget_range"))]
    pub budget_range: String,

    /// ISO date, `YYYY-MM-DD`.
    #[validate(length(min = 1, message = "Please provide a deadline"))]
    pub deadline: String,
}

/// Field values for inserting a project created from a brief.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProposal {
    pub agency_id: DbId,
    pub created_by: DbId,
    pub name: String,
    pub description: String,
    pub project_type: String,
    pub help_type: String,
    pub goals: String,
    pub budget_range: String,
    pub completion_date: Timestamp,
    pub status: ProjectStatus,
    pub proposal_status: ProposalStatus,
}

impl ProjectBrief {
    /// Validate the brief and turn it into insertable values.
    pub fn into_new_proposal(self, created_by: DbId) -> Result<NewProposal, CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;

        let completion_date = parse_deadline(&self.deadline)?;

        Ok(NewProposal {
            agency_id: self.agency_id,
            created_by,
            name: self.name,
            description: self.description,
            project_type: self.project_type,
            help_type: self.help_type,
            goals: self.goals,
            budget_range: self.budget_range,
            completion_date,
            status: INITIAL_PROJECT_STATUS,
            proposal_status: INITIAL_PROPOSAL_STATUS,
        })
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

fn validate_one_of(
    value: &str,
    allowed: &[&str],
    code: &'static str,
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new(code);
        err.message = Some(format!("'{value}' is not one of: {}", allowed.join(", ")).into());
        Err(err)
    }
}

fn validate_project_type(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, PROJECT_TYPES, "project_type")
}

fn validate_help_type(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, HELP_TYPES, "help_type")
}

fn validate_budget_range(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, BUDGET_RANGES, "budget_range")
}

/// Parse a `YYYY-MM-DD` deadline into a UTC midnight timestamp.
pub fn parse_deadline(deadline: &str) -> Result<Timestamp, CoreError> {
    let date = NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(format!(
            "Invalid deadline '{deadline}'. Expected YYYY-MM-DD"
        ))
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_brief() -> ProjectBrief {
        ProjectBrief {
            agency_id: 3,
            name: "Spring launch".to_string(),
            project_type: "Branding".to_string(),
            goals: "Refresh the brand before the spring campaign".to_string(),
            help_type: "Create something new".to_string(),
            description: "A new visual identity, logo set and style guide.".to_string(),
            budget_range: "$10,000 - $25,000".to_string(),
            deadline: "2026-12-01".to_string(),
        }
    }

    #[test]
    fn valid_brief_starts_as_requested_proposal() {
        let new = valid_brief().into_new_proposal(11).unwrap();
        assert_eq!(new.status, ProjectStatus::Proposal);
        assert_eq!(new.proposal_status, ProposalStatus::Requested);
        assert_eq!(new.created_by, 11);
        assert_eq!(new.agency_id, 3);
        assert_eq!(new.completion_date.to_rfc3339(), "2026-12-01T00:00:00+00:00");
    }

    #[test]
    fn short_name_is_rejected() {
        let brief = ProjectBrief {
            name: "X".to_string(),
            ..valid_brief()
        };
        assert_matches!(
            brief.into_new_proposal(1),
            Err(CoreError::Validation(msg)) if msg.contains("at least 2 characters")
        );
    }

    #[test]
    fn short_description_and_goals_are_rejected() {
        let brief = ProjectBrief {
            description: "Too short".to_string(),
            goals: "Short".to_string(),
            ..valid_brief()
        };
        let err = brief.into_new_proposal(1).unwrap_err().to_string();
        assert!(err.contains("more detailed description"));
        assert!(err.contains("more detail about your goals"));
    }

    #[test]
    fn unknown_budget_range_is_rejected() {
        let brief = ProjectBrief {
            budget_range: "Whatever it takes".to_string(),
            ..valid_brief()
        };
        assert_matches!(
            brief.into_new_proposal(1),
            Err(CoreError::Validation(msg)) if msg.contains("Whatever it takes")
        );
    }

    #[test]
    fn unknown_project_and_help_types_are_rejected() {
        let brief = ProjectBrief {
            project_type: "Podcast".to_string(),
            ..valid_brief()
        };
        assert!(brief.into_new_proposal(1).is_err());

        let brief = ProjectBrief {
            help_type: "Just vibes".to_string(),
            ..valid_brief()
        };
        assert!(brief.into_new_proposal(1).is_err());
    }

    #[test]
    fn missing_or_malformed_deadline_is_rejected() {
        let brief = ProjectBrief {
            deadline: String::new(),
            ..valid_brief()
        };
        assert_matches!(
            brief.into_new_proposal(1),
            Err(CoreError::Validation(msg)) if msg.contains("Please provide a deadline")
        );

        let brief = ProjectBrief {
            deadline: "01/12/2026".to_string(),
            ..valid_brief()
        };
        assert_matches!(
            brief.into_new_proposal(1),
            Err(CoreError::Validation(msg)) if msg.contains("Expected YYYY-MM-DD")
        );
    }

    #[test]
    fn option_lists_have_expected_sizes() {
        assert_eq!(PROJECT_TYPES.len(), 8);
        assert_eq!(HELP_TYPES.len(), 3);
        assert_eq!(BUDGET_RANGES.len(), 6);
    }
}
