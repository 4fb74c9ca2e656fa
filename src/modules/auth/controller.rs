use axum::extract::{Path, State};
use axum::{Json, http::StatusCode};
use tracing::instrument;
use utoipa::ToSchema;

use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, SignupDto, SignupResponse};
use super::service::AuthService;

#[derive(serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Sign up an account under the given role
#[utoipa::path(
    post,
    path = "/api/auth/signup/{role}",
    params(("role" = UserRole, Path, description = "Role of the new account")),
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing or empty fields", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    Path(role): Path<UserRole>,
    ValidatedJson(dto): ValidatedJson<SignupDto>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let user = UserService::create_user(&state.db, role, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: format!("{} created successfully", role.as_str()),
            user,
        }),
    ))
}

/// Log in and receive an access token plus the role's dashboard path
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials or missing fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
