//! Axum route handlers for profiles.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub work_history: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProfileForm> for UserProfile {
    fn from(form: ProfileForm) -> Self {
        UserProfile {
            id: None,
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: non_blank(form.phone),
            education: non_blank(form.education),
            work_history: non_blank(form.work_history),
        }
    }
}

/// GET /ui/profile?email=
pub async fn handle_lookup(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Html<String> {
    Html(super::lookup(state.api.as_ref(), &query.email).await)
}

/// POST /ui/profile
pub async fn handle_create(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Html<String> {
    Html(super::create(state.api.as_ref(), form.into()).await)
}
