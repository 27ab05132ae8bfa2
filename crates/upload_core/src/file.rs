use std::fmt;
use std::sync::Arc;

/// Extension a dropped file must carry to be accepted.
pub const SPREADSHEET_EXTENSION: &str = ".xlsx";

/// A user-selected file: its name plus the raw bytes to upload.
///
/// The content is shared, so cloning a selection into an effect is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Case-sensitive suffix check, matching what the service accepts.
    pub fn has_spreadsheet_extension(&self) -> bool {
        self.name.ends_with(SPREADSHEET_EXTENSION)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Links to the generated documents, usable directly as hyperlink targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub docx: String,
    pub md: String,
}

/// A successful generation as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub job_id: Option<String>,
    pub course_title: String,
    pub files: GeneratedFiles,
}
