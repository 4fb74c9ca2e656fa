use axum::Json;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::controller::MessageResponse;

/// Student dashboard (student tokens only)
#[utoipa::path(
    get,
    path = "/api/dashboard/student",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
#[instrument]
pub async fn student_dashboard() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the student dashboard".to_string(),
    })
}

/// Teacher dashboard (teacher tokens only)
#[utoipa::path(
    get,
    path = "/api/dashboard/teacher",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
#[instrument]
pub async fn teacher_dashboard() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the teacher dashboard".to_string(),
    })
}

/// Admin dashboard (admin tokens only)
#[utoipa::path(
    get,
    path = "/api/dashboard/admin",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
#[instrument]
pub async fn admin_dashboard() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the admin dashboard".to_string(),
    })
}
