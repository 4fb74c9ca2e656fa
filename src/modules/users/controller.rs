use axum::extract::{Path, State};
use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{UpdateUserDto, UpdatedUser, User, UserRole};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all accounts of a role
#[utoipa::path(
    get,
    path = "/api/users/{role}",
    params(("role" = UserRole, Path, description = "Account role")),
    responses(
        (status = 200, description = "Accounts of the given role", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Path(role): Path<UserRole>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users_by_role(&state.db, role).await?;
    Ok(Json(users))
}

/// Get one account by role and id
#[utoipa::path(
    get,
    path = "/api/users/{role}/{id}",
    params(
        ("role" = UserRole, Path, description = "Account role"),
        ("id" = Uuid, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account found", body = User),
        (status = 404, description = "No account with that id and role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path((role, id)): Path<(UserRole, Uuid)>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user_by_id(&state.db, role, id).await?;
    Ok(Json(user))
}

/// Partially update an account (name, email, optional password)
#[utoipa::path(
    put,
    path = "/api/users/{role}/{id}",
    params(
        ("role" = UserRole, Path, description = "Account role"),
        ("id" = Uuid, Path, description = "Account id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = UpdatedUser),
        (status = 400, description = "Name or email missing", body = ErrorResponse),
        (status = 404, description = "No account with that id and role", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path((role, id)): Path<(UserRole, Uuid)>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UpdatedUser>, AppError> {
    let updated = UserService::update_user(&state.db, role, id, dto).await?;
    Ok(Json(updated))
}

/// Delete an account, scoped by role
#[utoipa::path(
    delete,
    path = "/api/users/{role}/{id}",
    params(
        ("role" = UserRole, Path, description = "Account role"),
        ("id" = Uuid, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "No account with that id and role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path((role, id)): Path<(UserRole, Uuid)>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    UserService::delete_user(&state.db, role, id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("{} deleted successfully", role.as_str()),
        }),
    ))
}
