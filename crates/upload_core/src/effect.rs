use crate::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the file to the generation service. Exactly one is emitted per
    /// accepted submit; its completion must come back as
    /// `Msg::GenerationSucceeded` or `Msg::GenerationFailed`.
    SubmitFile { file: SelectedFile },
    /// A drop was rejected while a request was in flight, so nothing was shown.
    DropIgnored {
        file_name: Option<String>,
        reason: &'static str,
    },
}
