//! What a proposal action does once it has been authorized.
//!
//! The executor never consults the policy. Callers check
//! [`crate::proposal_policy::is_allowed`] first.

use serde::Serialize;

use crate::error::CoreError;
use crate::proposal_status::{ProjectStatus, ProposalAction, ProposalStatus};

/// Maximum length for decline feedback.
pub const MAX_FEEDBACK_LENGTH: usize = 10_000;

/// The writes an action produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionOutcome {
    pub proposal_status: ProposalStatus,
    /// Overall project status change, if the action has one.
    pub project_status: Option<ProjectStatus>,
    /// Feedback to store. `None` leaves any existing feedback untouched.
    pub feedback: Option<String>,
}

/// Compute the outcome of `action`.
///
/// `decline` requires non-blank feedback, which is stored as given. Every
/// other action ignores `feedback`.
pub fn apply_action(
    action: ProposalAction,
    feedback: Option<&str>,
) -> Result<TransitionOutcome, CoreError> {
    let outcome = match action {
        ProposalAction::Approve => TransitionOutcome {
            proposal_status: ProposalStatus::Approved,
            project_status: Some(ProjectStatus::Planning),
            feedback: None,
        },
        ProposalAction::Decline => {
            let feedback = validate_feedback(feedback)?;
            TransitionOutcome {
                proposal_status: ProposalStatus::Declined,
                project_status: None,
                feedback: Some(feedback.to_string()),
            }
        }
        ProposalAction::Send => TransitionOutcome {
            proposal_status: ProposalStatus::OnApproval,
            project_status: None,
            feedback: None,
        },
        ProposalAction::Create | ProposalAction::Update => TransitionOutcome {
            proposal_status: ProposalStatus::OnDevelopment,
            project_status: None,
            feedback: None,
        },
    };
    Ok(outcome)
}

/// Validate decline feedback: present, not whitespace-only, within length.
pub fn validate_feedback(feedback: Option<&str>) -> Result<&str, CoreError> {
    let feedback = feedback
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| CoreError::Validation("feedback required".to_string()))?;

    if feedback.chars().count() > MAX_FEEDBACK_LENGTH {
        return Err(CoreError::Validation(format!(
            "Feedback exceeds maximum length of {MAX_FEEDBACK_LENGTH} characters"
        )));
    }
    Ok(feedback)
}

/// The edge `action` takes out of `status` in the proposal state machine.
///
/// ```text
/// requested       --create-->  on development
/// on development  --send---->  on approval
/// on approval     --approve->  approved
/// on approval     --decline->  declined
/// declined        --send---->  on approval
/// declined        --update-->  on development
/// ```
pub fn next_status(status: ProposalStatus, action: ProposalAction) -> Option<ProposalStatus> {
    use ProposalAction as A;
    use ProposalStatus as S;
    match (status, action) {
        (S::Requested, A::Create) => Some(S::OnDevelopment),
        (S::OnDevelopment, A::Send) => Some(S::OnApproval),
        (S::OnApproval, A::Approve) => Some(S::Approved),
        (S::OnApproval, A::Decline) => Some(S::Declined),
        (S::Declined, A::Send) => Some(S::OnApproval),
        (S::Declined, A::Update) => Some(S::OnDevelopment),
        _ => None,
    }
}
