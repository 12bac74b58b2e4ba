pub mod health;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::profile::handlers as profile;
use crate::render::page::INDEX_HTML;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_handler))
        // Resume tools
        .route("/ui/analyze", post(resume::handle_analyze))
        .route("/ui/upload", post(resume::handle_upload))
        // Dashboard
        .route("/ui/dashboard", get(dashboard::handle_load))
        .route("/ui/dashboard/status", post(dashboard::handle_update_status))
        .route("/ui/dashboard/drag/:id", post(dashboard::handle_drag_start))
        .route("/ui/dashboard/drop/:status", post(dashboard::handle_drop))
        // Profiles
        .route(
            "/ui/profile",
            get(profile::handle_lookup).post(profile::handle_create),
        )
        .with_state(state)
}
