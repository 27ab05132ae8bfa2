use std::fmt;
use std::path::PathBuf;

use bytes::Bytes;

/// A file to send to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub content: Bytes,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// What a successful generation call returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocuments {
    pub job_id: Option<String>,
    pub course_title: String,
    pub docx: String,
    pub md: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        file_name: String,
        result: Result<GeneratedDocuments, EngineError>,
    },
    DownloadCompleted {
        locator: String,
        result: Result<PathBuf, EngineError>,
    },
}

/// Failure of an engine operation. `message` is what a user should see.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    pub kind: FailureKind,
    pub message: String,
}

impl EngineError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Non-OK HTTP status.
    HttpStatus(u16),
    /// The service answered OK but did not report success.
    Application,
    /// The body was not the JSON we expected.
    MalformedResponse,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Persist { path: PathBuf },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Application => write!(f, "generation failed"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Persist { path } => write!(f, "could not write {}", path.display()),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
