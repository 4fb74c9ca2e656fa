use axum::{Router, routing::get};

use crate::modules::results::controller::{create_result, get_result_by_id, get_results};
use crate::state::AppState;

pub fn init_results_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_results).post(create_result))
        .route("/{id}", get(get_result_by_id))
}
