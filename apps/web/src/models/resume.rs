use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
}

/// Match result returned by `POST /api/resume/analyze`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub match_score: f64,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Fields the server extracts from an uploaded resume. Any may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedResume {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub work_history: Option<String>,
}

/// Response of `POST /api/resume/upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResult {
    pub id: Option<i64>,
    pub parsed_data: ParsedResume,
    pub content_preview: String,
}

/// A resume file picked by the user, ready to be sent as multipart.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: bytes::Bytes,
}
