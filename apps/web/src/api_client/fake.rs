//! In-memory `AssistantApi` used by controller and router tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, AssistantApi};
use crate::models::application::{Application, ApplicationId, Status};
use crate::models::profile::UserProfile;
use crate::models::resume::{AnalysisResult, ParsedResume, ResumeFile, UploadResult};

#[derive(Default)]
pub struct FakeApi {
    pub applications: Mutex<Vec<Application>>,
    pub profiles: Mutex<Vec<UserProfile>>,
    pub fail_fetch: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_analyze: AtomicBool,
    pub fail_upload: AtomicBool,
    pub fetches: AtomicUsize,
    pub analyze_calls: AtomicUsize,
    pub updates: Mutex<Vec<(ApplicationId, Status)>>,
    pub uploads: Mutex<Vec<String>>,
}

pub fn application(id: ApplicationId, company: &str, status: &str) -> Application {
    Application {
        id,
        company: company.to_string(),
        role: "Engineer".to_string(),
        status: Some(status.to_string()),
    }
}

fn failure() -> ApiError {
    ApiError::Api {
        status: 500,
        message: "fake failure".to_string(),
    }
}

impl FakeApi {
    pub fn with_applications(applications: Vec<Application>) -> Self {
        Self {
            applications: Mutex::new(applications),
            ..Default::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn recorded_updates(&self) -> Vec<(ApplicationId, Status)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantApi for FakeApi {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_analyze.load(Ordering::SeqCst) {
            return Err(failure());
        }
        Ok(AnalysisResult {
            match_score: 87.0,
            suggestions: vec![
                format!("Tailor {} chars of resume", resume_text.len()),
                format!("Mirror {} chars of JD", job_description.len()),
            ],
        })
    }

    async fn upload_resume(&self, file: ResumeFile) -> Result<UploadResult, ApiError> {
        self.uploads.lock().unwrap().push(file.file_name.clone());
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(failure());
        }
        Ok(UploadResult {
            id: Some(1),
            parsed_data: ParsedResume {
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
            content_preview: String::from_utf8_lossy(&file.bytes).into_owned(),
        })
    }

    async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(failure());
        }
        Ok(self.applications.lock().unwrap().clone())
    }

    async fn update_status(&self, id: ApplicationId, status: Status) -> Result<(), ApiError> {
        self.updates.lock().unwrap().push((id, status));
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(failure());
        }
        // An unknown id is acknowledged like any other update.
        let mut apps = self.applications.lock().unwrap();
        if let Some(app) = apps.iter_mut().find(|a| a.id == id) {
            app.status = Some(status.to_string());
        }
        Ok(())
    }

    async fn get_profile(&self, email: &str) -> Result<UserProfile, ApiError> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 404,
                message: "Profile not found".to_string(),
            })
    }

    async fn create_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        let mut profiles = self.profiles.lock().unwrap();
        let created = UserProfile {
            id: Some(profiles.len() as i64 + 1),
            ..profile.clone()
        };
        profiles.push(created.clone());
        Ok(created)
    }
}
