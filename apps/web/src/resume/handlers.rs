//! Axum route handlers for the resume tools.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeFile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub jd: String,
}

/// POST /ui/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    Html(super::analyze(state.api.as_ref(), &form.resume, &form.jd).await)
}

/// POST /ui/upload
///
/// Reads the `file` part; other parts are ignored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        file = Some(ResumeFile {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    Ok(Html(super::upload(state.api.as_ref(), file).await))
}
