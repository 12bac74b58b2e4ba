//! Axum route handlers for the application dashboard.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::dashboard::controller::DashboardView;
use crate::errors::AppError;
use crate::models::application::{ApplicationId, Status};
use crate::render::dashboard::render_dashboard;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub id: ApplicationId,
    pub status: String,
}

fn known_status(value: &str) -> Result<Status, AppError> {
    value
        .parse::<Status>()
        .map_err(|e| AppError::Validation(format!("Cannot move application: {e}")))
}

/// A fresh view replaces the columns; no view means the page keeps what it shows.
fn fragment_or_unchanged(view: Option<DashboardView>) -> Response {
    match view {
        Some(view) => Html(render_dashboard(&view)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /ui/dashboard
pub async fn handle_load(State(state): State<AppState>) -> Html<String> {
    let view = state.dashboard.load().await;
    Html(render_dashboard(&view))
}

/// POST /ui/dashboard/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    form: Result<Form<StatusForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let status = known_status(&form.status)?;
    let view = state.dashboard.mutate_status(form.id, status).await;
    Ok(fragment_or_unchanged(view))
}

/// POST /ui/dashboard/drag/:id
pub async fn handle_drag_start(
    State(state): State<AppState>,
    id: Result<Path<ApplicationId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.dashboard.drag_start(id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /ui/dashboard/drop/:status
pub async fn handle_drop(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Response, AppError> {
    let status = known_status(&status)?;
    let view = state.dashboard.drop_on(status).await;
    Ok(fragment_or_unchanged(view))
}
