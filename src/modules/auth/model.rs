use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// Claims carried by an access token: the subject's identity plus the
/// issuance/expiry pair. Role travels as its lowercase string form.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Signup payload, shared by all three roles. All fields must be present
/// and non-empty; no further format checks (matching the observed
/// surface).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
    #[serde(rename = "redirectTo")]
    pub redirect_to: String,
}

/// Post-login destination for a role. Pure mapping with an explicit
/// fallback for anything unrecognized.
pub fn redirect_path_for_role(role: &str) -> &'static str {
    match role {
        "student" => "/student/dashboard",
        "teacher" => "/teacher/dashboard",
        "admin" => "/admin/dashboard",
        _ => "/",
    }
}
