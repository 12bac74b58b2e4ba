// Resume tools: analysis against a job description and file upload.

pub mod handlers;

use tracing::error;

use crate::api_client::AssistantApi;
use crate::models::resume::ResumeFile;
use crate::render::message;
use crate::render::resume::{render_analysis, render_upload};

pub const MISSING_ANALYZE_INPUT: &str = "Please provide both resume and job description.";
pub const ANALYZE_FAILED: &str = "An error occurred during analysis.";
pub const MISSING_UPLOAD_FILE: &str = "Please choose a resume file to upload.";
pub const UPLOAD_FAILED: &str = "Failed to upload resume.";

/// Runs an analysis and renders the `#result` fragment.
/// Blank inputs never reach the API.
pub async fn analyze(api: &dyn AssistantApi, resume_text: &str, job_description: &str) -> String {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return message(MISSING_ANALYZE_INPUT);
    }

    match api.analyze(resume_text, job_description).await {
        Ok(result) => render_analysis(&result),
        Err(e) => {
            error!("Analyze failed: {e}");
            message(ANALYZE_FAILED)
        }
    }
}

/// Uploads a resume file and renders the `#uploadResult` fragment.
pub async fn upload(api: &dyn AssistantApi, file: Option<ResumeFile>) -> String {
    let Some(file) = file.filter(|f| !f.bytes.is_empty()) else {
        return message(MISSING_UPLOAD_FILE);
    };

    match api.upload_resume(file).await {
        Ok(result) => render_upload(&result),
        Err(e) => {
            error!("Upload failed: {e}");
            message(UPLOAD_FAILED)
        }
    }
}
