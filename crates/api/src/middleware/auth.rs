//! Caller identity for Axum handlers, read from a Bearer JWT.

use agencyhub_core::error::CoreError;
use agencyhub_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in caller.
///
/// Only the user id travels in the token. What the caller may do in an
/// agency is decided per request from their membership there, so a handler
/// pairs this with the project it touches:
///
/// ```ignore
/// pub async fn get_options(
///     State(state): State<AppState>,
///     user: AuthUser,
///     Path(id): Path<DbId>,
/// ) -> AppResult<Json<DataResponse<ProposalOptions>>> {
///     let store = state.project_store();
///     let options = ProposalWorkflow::new(&store)
///         .offered_actions(id, user.user_id)
///         .await?;
///     Ok(Json(DataResponse { data: options }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;
        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// The token part of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid text"))?;

    match value.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>",
        )),
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
