use std::time::Duration;

use client_logging::client_debug;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::resume::ResumePayload;
use crate::{ApiError, FailureKind};

/// Host of the deployed interview backend, used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://mockinterviewbackend.onrender.com/";

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_resume_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            connect_timeout: Duration::from_secs(10),
            // Keyword extraction and the interviewer model can both be slow.
            request_timeout: Duration::from_secs(120),
            max_resume_bytes: 10 * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(rename = "resumeKeywords")]
    resume_keywords: &'a [String],
}

#[derive(Debug, Deserialize)]
struct KeywordsResponse {
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// The two remote operations the backend offers.
#[async_trait::async_trait]
pub trait InterviewApi: Send + Sync {
    /// Uploads a resume and returns the extracted keyword set.
    async fn upload_resume(&self, resume: &ResumePayload) -> Result<Vec<String>, ApiError>;

    /// Sends one chat message with its keyword context and returns the reply.
    async fn send_chat(&self, message: &str, keywords: &[String]) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.settings
            .base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl InterviewApi for ReqwestApi {
    async fn upload_resume(&self, resume: &ResumePayload) -> Result<Vec<String>, ApiError> {
        let part = multipart::Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.mime)
            .map_err(|err| {
                ApiError::new(
                    FailureKind::UnsupportedFileType {
                        extension: resume.mime.clone(),
                    },
                    err.to_string(),
                )
            })?;
        let form = multipart::Form::new().part(RESUME_FIELD, part);

        let response = self
            .client
            .post(self.endpoint("upload-resume")?)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let parsed: KeywordsResponse = response
            .json()
            .await
            .map_err(|err| ApiError::new(FailureKind::MalformedResponse, err.to_string()))?;
        client_debug!(
            "upload-resume returned {} keywords for {}",
            parsed.keywords.len(),
            resume.file_name
        );
        Ok(parsed.keywords)
    }

    async fn send_chat(&self, message: &str, keywords: &[String]) -> Result<String, ApiError> {
        let body = ChatRequest {
            message,
            resume_keywords: keywords,
        };

        let response = self
            .client
            .post(self.endpoint("chat")?)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| ApiError::new(FailureKind::MalformedResponse, err.to_string()))?;
        client_debug!("chat reply: {} bytes", parsed.response.len());
        Ok(parsed.response)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::MalformedResponse, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
