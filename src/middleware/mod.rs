//! Authentication and authorization middleware.
//!
//! Request flow: the [`auth::AuthUser`] extractor verifies the Bearer
//! token and populates the caller's identity; [`role::require_roles`]
//! then compares that identity's role against the route's permitted set.
//! The gate always runs after a successful extraction, never without one.

pub mod auth;
pub mod role;
