use crate::UploadPhase;

pub const PROCESSING_TEXT: &str = "Processing...";
pub const SUCCESS_TEXT: &str = "Documents generated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

/// Contents of the status panel when it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub tone: StatusTone,
    pub spinner_visible: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadsView {
    pub course_title: String,
    pub docx_href: String,
    pub md_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: UploadPhase,
    pub file_label: Option<String>,
    pub submit_enabled: bool,
    pub drop_highlighted: bool,
    /// `None` means the status panel is hidden.
    pub status: Option<StatusView>,
    /// `None` means the downloads panel is hidden.
    pub downloads: Option<DownloadsView>,
}

impl AppViewModel {
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn spinner_visible(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.spinner_visible)
    }
}
