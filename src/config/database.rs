//! PostgreSQL connection pool initialization.
//!
//! The connection string comes from `DATABASE_URL`. The returned pool is
//! cheaply cloneable and shared through [`crate::state::AppState`]; each
//! repository operation acquires a connection for the duration of its
//! single query.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the database is
//! unreachable. Both are startup-fatal conditions.

use sqlx::PgPool;
use std::env;

pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
