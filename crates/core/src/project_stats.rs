//! Dashboard counters over overall project status.

use serde::Serialize;

use crate::proposal_status::ProjectStatus;

/// Project counts shown on the projects page.
///
/// `planning` projects count toward `total` but have no counter of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: u64,
    pub ongoing: u64,
    pub proposals: u64,
    pub finished: u64,
}

impl ProjectStats {
    /// Tally statuses one by one.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ProjectStatus>,
    {
        statuses.into_iter().fold(Self::default(), |mut stats, status| {
            stats.total += 1;
            match status {
                ProjectStatus::Proposal => stats.proposals += 1,
                ProjectStatus::Ongoing => stats.ongoing += 1,
                ProjectStatus::Finished => stats.finished += 1,
                ProjectStatus::Planning => {}
            }
            stats
        })
    }

    /// Build from pre-aggregated `(status, count)` pairs.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (ProjectStatus, u64)>,
    {
        counts.into_iter().fold(Self::default(), |mut stats, (status, n)| {
            stats.total += n;
            match status {
                ProjectStatus::Proposal => stats.proposals += n,
                ProjectStatus::Ongoing => stats.ongoing += n,
                ProjectStatus::Finished => stats.finished += n,
                ProjectStatus::Planning => {}
            }
            stats
        })
    }
}
