use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, SignupDto, SignupResponse};
use crate::modules::results::model::{CreateResultDto, ExamResult};
use crate::modules::users::controller::MessageResponse;
use crate::modules::users::model::{UpdateUserDto, UpdatedUser, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::results::controller::create_result,
        crate::modules::results::controller::get_results,
        crate::modules::results::controller::get_result_by_id,
        crate::modules::dashboard::controller::student_dashboard,
        crate::modules::dashboard::controller::teacher_dashboard,
        crate::modules::dashboard::controller::admin_dashboard,
    ),
    components(
        schemas(
            User,
            UserRole,
            UpdatedUser,
            UpdateUserDto,
            SignupDto,
            SignupResponse,
            LoginRequest,
            LoginResponse,
            ExamResult,
            CreateResultDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "Role-scoped account management"),
        (name = "Results", description = "Exam result records"),
        (name = "Dashboard", description = "Role-gated post-login destinations")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Role-based school user-management and academic-results API.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
