//! Which proposal actions an actor is offered at a given status.
//!
//! The rules are an ordered table and the first matching rule wins. Order
//! matters: an agency admin on a declined proposal hits the admin-only
//! `send` rule before the admin-or-editor `update` rule, so admins are
//! offered `send` and editors `update`.

use crate::proposal_status::{ProposalAction, ProposalStatus};
use crate::roles::{Actor, Role, UserType};

/// One row of the policy table.
struct PolicyRule {
    user_type: UserType,
    roles: &'static [Role],
    status: ProposalStatus,
    actions: &'static [ProposalAction],
}

impl PolicyRule {
    fn matches(&self, status: ProposalStatus, actor: Actor) -> bool {
        self.status == status
            && self.user_type == actor.user_type
            && self.roles.contains(&actor.role)
    }
}

const ADMIN: &[Role] = &[Role::Admin];
const ADMIN_OR_EDITOR: &[Role] = &[Role::Admin, Role::Editor];

const RULES: &[PolicyRule] = &[
    PolicyRule {
        user_type: UserType::Client,
        roles: ADMIN,
        status: ProposalStatus::OnApproval,
        actions: &[ProposalAction::Approve, ProposalAction::Decline],
    },
    PolicyRule {
        user_type: UserType::Agency,
        roles: ADMIN,
        status: ProposalStatus::OnDevelopment,
        actions: &[ProposalAction::Send],
    },
    PolicyRule {
        user_type: UserType::Agency,
        roles: ADMIN,
        status: ProposalStatus::Declined,
        actions: &[ProposalAction::Send],
    },
    PolicyRule {
        user_type: UserType::Agency,
        roles: ADMIN_OR_EDITOR,
        status: ProposalStatus::Requested,
        actions: &[ProposalAction::Create],
    },
    PolicyRule {
        user_type: UserType::Agency,
        roles: ADMIN_OR_EDITOR,
        status: ProposalStatus::Declined,
        actions: &[ProposalAction::Update],
    },
];

/// Actions offered to `actor` on a proposal at `status`.
///
/// Total over the closed domains: any combination not in the table yields an
/// empty list.
pub fn available_actions(status: ProposalStatus, actor: Actor) -> Vec<ProposalAction> {
    RULES
        .iter()
        .find(|rule| rule.matches(status, actor))
        .map(|rule| rule.actions.to_vec())
        .unwrap_or_default()
}

/// Whether `action` is among the actions offered to `actor` at `status`.
pub fn is_allowed(action: ProposalAction, status: ProposalStatus, actor: Actor) -> bool {
    available_actions(status, actor).contains(&action)
}
