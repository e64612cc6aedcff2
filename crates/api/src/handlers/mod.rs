pub mod agency;
pub mod membership;
pub mod project;
pub mod proposal;

use agencyhub_core::error::CoreError;
use agencyhub_core::roles::Actor;
use agencyhub_core::types::DbId;
use agencyhub_db::repositories::AgencyMemberRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Resolve the caller's actor in `agency_id`, or reject with 403 when they
/// have no approved membership there.
pub(crate) async fn require_actor(
    state: &AppState,
    user_id: DbId,
    agency_id: DbId,
) -> AppResult<Actor> {
    let member = AgencyMemberRepo::find_for_user_in_agency(&state.pool, user_id, agency_id).await?;
    let actor = member
        .map(|m| m.to_membership())
        .transpose()?
        .and_then(|m| m.actor());

    actor.ok_or_else(|| {
        CoreError::Forbidden(format!(
            "User {user_id} is not an approved member of agency {agency_id}"
        ))
        .into()
    })
}
