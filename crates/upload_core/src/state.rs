use crate::view_model::{
    AppViewModel, DownloadsView, StatusTone, StatusView, PROCESSING_TEXT, SUCCESS_TEXT,
};
use crate::{GenerationResult, SelectedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusPanel {
    Hidden,
    Processing,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    phase: UploadPhase,
    selected: Option<SelectedFile>,
    drop_highlighted: bool,
    status: StatusPanel,
    result: Option<GenerationResult>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: UploadPhase::Idle,
            selected: None,
            drop_highlighted: false,
            status: StatusPanel::Hidden,
            result: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    /// Submit is only offered with a file in hand and nothing in flight.
    pub fn submit_enabled(&self) -> bool {
        self.selected.is_some() && !self.is_submitting()
    }

    pub fn view(&self) -> AppViewModel {
        let status = match &self.status {
            StatusPanel::Hidden => None,
            StatusPanel::Processing => Some(StatusView {
                tone: StatusTone::Neutral,
                spinner_visible: true,
                text: PROCESSING_TEXT.to_string(),
            }),
            StatusPanel::Succeeded => Some(StatusView {
                tone: StatusTone::Success,
                spinner_visible: false,
                text: SUCCESS_TEXT.to_string(),
            }),
            StatusPanel::Failed(message) => Some(StatusView {
                tone: StatusTone::Error,
                spinner_visible: false,
                text: format!("Error: {message}"),
            }),
        };
        let downloads = self.result.as_ref().map(|result| DownloadsView {
            course_title: result.course_title.clone(),
            docx_href: result.files.docx.clone(),
            md_href: result.files.md.clone(),
        });

        AppViewModel {
            phase: self.phase,
            file_label: self.selected.as_ref().map(|file| file.name().to_string()),
            submit_enabled: self.submit_enabled(),
            drop_highlighted: self.drop_highlighted,
            status,
            downloads,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_drop_highlight(&mut self, highlighted: bool) {
        if self.drop_highlighted != highlighted {
            self.drop_highlighted = highlighted;
            self.mark_dirty();
        }
    }

    /// Stores a new selection. Any previous outcome is cleared, except while a
    /// request is in flight: then only the file is swapped and the phase holds.
    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        if !self.is_submitting() {
            self.phase = UploadPhase::FileSelected;
            self.status = StatusPanel::Hidden;
            self.result = None;
        }
        self.mark_dirty();
    }

    /// Moves into `Submitting` and hands back the file to send, or `None`
    /// when there is nothing to submit or a submission is already running.
    pub(crate) fn begin_submission(&mut self) -> Option<SelectedFile> {
        if self.is_submitting() {
            return None;
        }
        let file = self.selected.clone()?;
        self.phase = UploadPhase::Submitting;
        self.status = StatusPanel::Processing;
        self.result = None;
        self.mark_dirty();
        Some(file)
    }

    pub(crate) fn apply_success(&mut self, result: GenerationResult) {
        self.phase = UploadPhase::Success;
        self.status = StatusPanel::Succeeded;
        self.result = Some(result);
        self.mark_dirty();
    }

    /// Shows `message` in the status panel in its error style. The panel text
    /// becomes `"Error: " + message`; the downloads panel is left as it is.
    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.phase = UploadPhase::Error;
        self.status = StatusPanel::Failed(message.into());
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
