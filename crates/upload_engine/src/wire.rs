//! JSON shapes returned by the generation endpoint.
//!
//! Each field is read on its own: a field of an unexpected type counts as
//! absent without hiding the fields around it.
use serde_json::Value;

#[derive(Debug, Default)]
pub(crate) struct GenerateResponse {
    pub status: Option<String>,
    pub job_id: Option<String>,
    pub course_title: Option<String>,
    pub files: Option<ResponseFiles>,
    pub detail: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct ResponseFiles {
    pub docx: Option<String>,
    pub md: Option<String>,
    /// Older deployments name the second document this way.
    pub lesson_plan: Option<String>,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl GenerateResponse {
    /// Any JSON value is accepted; non-objects simply carry no fields.
    pub(crate) fn from_value(value: &Value) -> Self {
        let files = value.get("files").filter(|files| files.is_object()).map(|files| {
            ResponseFiles {
                docx: string_field(files, "docx"),
                md: string_field(files, "md"),
                lesson_plan: string_field(files, "lesson_plan"),
            }
        });
        Self {
            status: string_field(value, "status"),
            job_id: string_field(value, "job_id"),
            course_title: string_field(value, "course_title"),
            files,
            detail: string_field(value, "detail"),
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// The server's `detail` string, when it sent a usable one.
    pub(crate) fn detail_message(&self) -> Option<&str> {
        self.detail.as_deref().filter(|detail| !detail.is_empty())
    }
}

impl ResponseFiles {
    pub(crate) fn md_locator(&self) -> Option<&str> {
        self.md.as_deref().or(self.lesson_plan.as_deref())
    }
}
