pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

/// Room for the text fields and multipart framing around the résumé itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handlers::handle_upload))
        .route("/candidates", get(handlers::handle_list_candidates))
        .route(
            "/candidates/:id",
            get(handlers::handle_get_candidate).delete(handlers::handle_delete_candidate),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
