//! Role-scoped account repository.
//!
//! One implementation serves all three roles: every query carries the
//! role filter alongside the id, so a student id can never resolve,
//! mutate, or delete a row of another role.

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::SignupDto;
use crate::modules::users::model::{UpdateUserDto, UpdatedUser, User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Builds the partial UPDATE statement for the supplied columns.
///
/// Only supplied columns appear in the SET list, and the WHERE placeholder
/// index is computed from the actual column count. Hardcoding that index
/// is the bug class to avoid here: it drifts as optional fields are
/// omitted.
fn build_update_sql(columns: &[&str]) -> String {
    let set_clause = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE users SET {} WHERE id = ${} RETURNING id, name, email, role",
        set_clause,
        columns.len() + 1
    )
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            // The violated constraint names which field collided; that
            // detail stays in the log.
            tracing::warn!(constraint = ?db_err.constraint(), "account uniqueness violation");
            return AppError::conflict(anyhow::anyhow!("Username or email already exists"));
        }
    }
    AppError::database(anyhow::Error::from(e))
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn create_user(
        db: &PgPool,
        role: UserRole,
        dto: SignupDto,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, username, email, password, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, username, email, role",
        )
        .bind(&dto.name)
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users_by_role(db: &PgPool, role: UserRole) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, username, email, role FROM users WHERE role = $1",
        )
        .bind(role)
        .fetch_all(db)
        .await
        .context("Failed to fetch users by role")
        .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user_by_id(
        db: &PgPool,
        role: UserRole,
        id: Uuid,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, username, email, role FROM users WHERE id = $1 AND role = $2",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("{} not found", role.as_str())))?;

        Ok(user)
    }

    /// Partial update touching only the supplied columns. The existence
    /// pre-check is scoped by id and role; the UPDATE itself then keys on
    /// the id alone, so the WHERE placeholder is always `len + 1`.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        role: UserRole,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<UpdatedUser, AppError> {
        Self::get_user_by_id(db, role, id).await?;

        let mut columns = vec!["name", "email"];
        let mut values = vec![dto.name, dto.email];

        if let Some(password) = dto.password {
            columns.push("password");
            values.push(hash_password(&password)?);
        }

        let sql = build_update_sql(&columns);

        let mut query = sqlx::query_as::<_, UpdatedUser>(&sql);
        for value in &values {
            query = query.bind(value);
        }

        let updated = query
            .bind(id)
            .fetch_one(db)
            .await
            .map_err(map_unique_violation)?;

        Ok(updated)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, role: UserRole, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = $2")
            .bind(id)
            .bind(role)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "{} not found",
                role.as_str()
            )));
        }

        Ok(())
    }
}
