use axum::{Router, middleware, routing::get};

use crate::middleware::role::{require_admin, require_student, require_teacher};
use crate::state::AppState;

use super::controller::{admin_dashboard, student_dashboard, teacher_dashboard};

/// Each dashboard declares its exact permitted role set; there is no
/// hierarchy, so an admin token does not open the teacher dashboard.
pub fn init_dashboard_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/student",
            get(student_dashboard)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_student)),
        )
        .route(
            "/teacher",
            get(teacher_dashboard)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher)),
        )
        .route(
            "/admin",
            get(admin_dashboard)
                .route_layer(middleware::from_fn_with_state(state, require_admin)),
        )
}
