use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the Bearer token and yields the caller's
/// claims. The role gate reads from this; it is the only place tokens
/// are verified.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> &str {
        &self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        let claims = verify_token(token, &state.jwt_config).map_err(|cause| {
            // Expired, bad-signature, and malformed stay distinct in the
            // log; the caller sees one 401.
            tracing::warn!(%cause, "token verification failed");
            AppError::unauthorized(anyhow::anyhow!("Invalid or expired token"))
        })?;

        Ok(AuthUser(claims))
    }
}
