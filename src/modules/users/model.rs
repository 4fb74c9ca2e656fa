//! Account models and DTOs.
//!
//! The [`User`] projection is what every read path returns: the password
//! hash lives only in the `users` table and in the login-internal row
//! struct, never in a serializable type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The three account roles. Role is assigned at signup and immutable
/// afterwards; every repository operation is scoped by it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account as returned to callers. No password field by construction.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Projection returned by the partial update: the columns the `RETURNING`
/// clause yields (username is not updatable and is omitted).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UpdatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// DTO for the partial update. `name` and `email` must be supplied;
/// `password` is optional and re-hashed when present. A supplied
/// empty string still counts as supplied and overwrites — callers
/// validate upstream if that is undesired.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}
