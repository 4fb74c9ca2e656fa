//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: token issue and verification
//! - [`password`]: bcrypt hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
