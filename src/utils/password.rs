use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(AppError::internal)
}

/// Returns `false` for a wrong password and for a hash the verifier
/// cannot parse. A credential check is a boolean, never a failure: a
/// corrupt stored hash must deny the login, not surface as a 500.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}
