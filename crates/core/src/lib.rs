//! Domain logic for agency projects and the proposal workflow.
//!
//! Nothing in this crate touches the network or the database directly;
//! persistence is reached through the [`proposal_workflow::ProjectStore`]
//! trait, which the `agencyhub-db` crate implements.

pub mod error;
pub mod membership;
pub mod project_brief;
pub mod project_stats;
pub mod proposal_policy;
pub mod proposal_status;
pub mod proposal_transition;
pub mod proposal_workflow;
pub mod roles;
pub mod types;
