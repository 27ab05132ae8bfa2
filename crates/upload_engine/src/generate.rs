use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use reqwest::multipart::{Form, Part};

use crate::wire::GenerateResponse;
use crate::{EngineError, FailureKind, GeneratedDocuments, UploadRequest};

/// Shown when the service reports failure without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed";

const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct GenerateSettings {
    /// Origin of the generation service, e.g. `http://localhost:8000`.
    pub base_url: String,
    pub endpoint_path: String,
    pub connect_timeout: Duration,
    /// Overall deadline for one call. `None` waits for the service to settle.
    pub request_timeout: Option<Duration>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            endpoint_path: "/api/generate".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl GenerateSettings {
    pub fn endpoint_url(&self) -> Result<reqwest::Url, EngineError> {
        reqwest::Url::parse(&self.base_url)
            .and_then(|base| base.join(&self.endpoint_path))
            .map_err(|err| EngineError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &UploadRequest) -> Result<GeneratedDocuments, EngineError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerator {
    settings: GenerateSettings,
}

impl ReqwestGenerator {
    pub fn new(settings: GenerateSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GenerateSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, EngineError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| EngineError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for ReqwestGenerator {
    async fn generate(&self, request: &UploadRequest) -> Result<GeneratedDocuments, EngineError> {
        let url = self.settings.endpoint_url()?;
        let client = self.build_client()?;

        engine_info!(
            "Submitting {} ({} bytes) to {}",
            request.file_name,
            request.content.len(),
            url
        );

        let part = Part::bytes(request.content.to_vec()).file_name(request.file_name.clone());
        let form = Form::new().part(FILE_FIELD, part);

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let outcome = interpret_response(status, &body);
        if let Err(err) = &outcome {
            engine_warn!("Generation of {} failed ({}): {}", request.file_name, err.kind, err);
        }
        outcome
    }
}

/// Decides the outcome of a generation call from its status and body.
///
/// The body must be JSON whatever the status; a body that does not parse is
/// reported with the parser's message. Anything that parses but is not an OK
/// `"status": "success"` payload yields the server's `detail` or the generic
/// failure text.
pub(crate) fn interpret_response(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<GeneratedDocuments, EngineError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|err| EngineError::new(FailureKind::MalformedResponse, err.to_string()))?;
    let parsed = GenerateResponse::from_value(&value);

    if status.is_success() && parsed.is_success() {
        return success_documents(parsed);
    }

    let message = parsed
        .detail_message()
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
        .to_string();
    let kind = if status.is_success() {
        FailureKind::Application
    } else {
        FailureKind::HttpStatus(status.as_u16())
    };
    Err(EngineError::new(kind, message))
}

fn success_documents(parsed: GenerateResponse) -> Result<GeneratedDocuments, EngineError> {
    let missing = |field: &str| {
        EngineError::new(
            FailureKind::MalformedResponse,
            format!("success response is missing `{field}`"),
        )
    };
    let files = parsed.files.as_ref().ok_or_else(|| missing("files"))?;
    let docx = files.docx.clone().ok_or_else(|| missing("files.docx"))?;
    let md = files
        .md_locator()
        .map(str::to_string)
        .ok_or_else(|| missing("files.md"))?;
    let course_title = parsed
        .course_title
        .clone()
        .ok_or_else(|| missing("course_title"))?;

    Ok(GeneratedDocuments {
        job_id: parsed.job_id,
        course_title,
        docx,
        md,
    })
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> EngineError {
    if err.is_timeout() {
        return EngineError::new(FailureKind::Timeout, err.to_string());
    }
    EngineError::new(FailureKind::Network, err.to_string())
}
