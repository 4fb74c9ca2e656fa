//! Environment-backed configuration, loaded once at startup.
//!
//! Each submodule covers one concern:
//!
//! - [`database`]: PostgreSQL connection pool
//! - [`jwt`]: signing secret and token expiry window
//! - [`cors`]: allowed origins
//! - [`server`]: bind address

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
