//! Role gate for protected routes.
//!
//! A route declares its exact permitted role set; the gate denies
//! whenever the authenticated identity's role is not a member. Matching
//! is exact — there is no role hierarchy, so an admin token does not
//! satisfy a teacher-only route.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks the authenticated caller's role against `allowed_roles`.
///
/// The gate extracts [`AuthUser`] itself, so it can never run against an
/// unauthenticated request; a missing or invalid token fails here with
/// 401 before any role comparison happens.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Student]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Teacher]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Allow/deny decision for an already-authenticated identity against a
/// permitted role set. Usable directly from handlers that gate inline.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let user_role = parse_role_from_string(auth_user.role())?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(anyhow::anyhow!("Access denied")));
    }

    Ok(())
}

/// A role claim outside the known set means the token was minted by
/// other code, not that the caller lacks permission.
pub fn parse_role_from_string(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "student" => Ok(UserRole::Student),
        "teacher" => Ok(UserRole::Teacher),
        "admin" => Ok(UserRole::Admin),
        _ => Err(AppError::unauthorized(anyhow::anyhow!(
            "Unknown role in token: {}",
            role_str
        ))),
    }
}
