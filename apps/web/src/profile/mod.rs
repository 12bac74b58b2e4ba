// Profile lookup and creation against the assistant API.

pub mod handlers;

use tracing::error;

use crate::api_client::AssistantApi;
use crate::models::profile::UserProfile;
use crate::render::message;
use crate::render::profile::render_profile;

pub const MISSING_EMAIL: &str = "Please provide an email address.";
pub const MISSING_PROFILE_INPUT: &str = "Please provide both name and email.";
pub const LOAD_FAILED: &str = "Failed to load profile.";
pub const CREATE_FAILED: &str = "Failed to create profile.";

pub async fn lookup(api: &dyn AssistantApi, email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        return message(MISSING_EMAIL);
    }

    match api.get_profile(email).await {
        Ok(profile) => render_profile(&profile),
        Err(e) => {
            error!("Profile lookup for {email} failed: {e}");
            message(LOAD_FAILED)
        }
    }
}

pub async fn create(api: &dyn AssistantApi, profile: UserProfile) -> String {
    if profile.full_name.trim().is_empty() || profile.email.trim().is_empty() {
        return message(MISSING_PROFILE_INPUT);
    }

    match api.create_profile(&profile).await {
        Ok(created) => render_profile(&created),
        Err(e) => {
            error!("Profile creation failed: {e}");
            message(CREATE_FAILED)
        }
    }
}
