use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse, redirect_path_for_role};

pub struct AuthService;

impl AuthService {
    /// Validates credentials and issues an access token.
    ///
    /// An unknown email and a failed password check are logged as
    /// distinct causes but answered identically, so the response gives
    /// no account-enumeration signal.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // Login is the one read path that needs the stored hash; the row
        // struct stays private to this function.
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            username: String,
            email: String,
            password: String,
            role: UserRole,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, username, email, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| {
            tracing::warn!("login attempt for unknown email");
            AppError::bad_request(anyhow::anyhow!("Invalid credentials"))
        })?;

        if !verify_password(&dto.password, &row.password) {
            tracing::warn!(user_id = %row.id, "login attempt with wrong password");
            return Err(AppError::bad_request(anyhow::anyhow!("Invalid credentials")));
        }

        let token = create_access_token(row.id, &row.name, &row.role, jwt_config)?;

        let user = User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            role: row.role,
        };

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            redirect_to: redirect_path_for_role(user.role.as_str()).to_string(),
            user,
        })
    }
}
