/// Assistant API client: the single point of entry for every call this frontend
/// makes to the job application assistant server.
///
/// No other module talks HTTP to the assistant API directly. Calls are made
/// once: no retries, no timeouts, no auth headers.
use async_trait::async_trait;
use reqwest::{multipart, Client, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::application::{
    Application, ApplicationId, DashboardResponse, Status, StatusUpdate,
};
use crate::models::profile::UserProfile;
use crate::models::resume::{AnalysisResult, AnalyzeRequest, ResumeFile, UploadResult};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Operations the UI consumes from the assistant API.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError>;

    async fn upload_resume(&self, file: ResumeFile) -> Result<UploadResult, ApiError>;

    async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError>;

    /// Fails only when the request could not be sent. Any HTTP answer counts
    /// as an acknowledgement.
    async fn update_status(&self, id: ApplicationId, status: Status) -> Result<(), ApiError>;

    async fn get_profile(&self, email: &str) -> Result<UserProfile, ApiError>;

    async fn create_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError>;
}

/// reqwest-backed implementation talking to a live assistant server.
#[derive(Clone)]
pub struct HttpAssistantApi {
    client: Client,
    base_url: Url,
}

impl HttpAssistantApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl AssistantApi for HttpAssistantApi {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError> {
        let response = self
            .client
            .post(self.endpoint(&["api", "resume", "analyze"]))
            .json(&AnalyzeRequest {
                resume_text,
                job_description,
            })
            .send()
            .await?;
        read_json(response).await
    }

    async fn upload_resume(&self, file: ResumeFile) -> Result<UploadResult, ApiError> {
        let mut part = multipart::Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint(&["api", "resume", "upload"]))
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&["api", "dashboard"]))
            .send()
            .await?;
        let dashboard: DashboardResponse = read_json(response).await?;
        debug!("Fetched {} applications", dashboard.applications.len());
        Ok(dashboard.applications)
    }

    async fn update_status(&self, id: ApplicationId, status: Status) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(&["api", "dashboard", "update"]))
            .json(&StatusUpdate { id, status })
            .send()
            .await?;
        // Acknowledgement is not inspected beyond a log line.
        let ack = response.status();
        if !ack.is_success() {
            warn!("Status update of application {id} acknowledged with {ack}");
        }
        Ok(())
    }

    async fn get_profile(&self, email: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&["profile", email]))
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        let response = self
            .client
            .post(self.endpoint(&["profile", ""]))
            .json(profile)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Reads a successful response body as JSON. Non-JSON bodies surface as `Parse`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = ensure_success(response).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
}


#[cfg(test)]
pub mod fake;
