use crate::{GenerationResult, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Pointer dragged a payload over the drop target.
    DragEntered,
    /// Pointer left the drop target without dropping.
    DragLeft,
    /// A payload was dropped on the drop target. Only `.xlsx` names are accepted.
    ///
    /// A rejection normally shows an error. While a request is in flight the
    /// processing panel is kept instead and the rejection is only reported
    /// through `Effect::DropIgnored`.
    FileDropped(Option<SelectedFile>),
    /// The file picker reported a selection.
    ///
    /// Unlike drops, picker selections are not extension-checked. The picker
    /// itself is expected to filter; the two paths are kept distinct on purpose
    /// until the intended behaviour is settled.
    FilePicked(Option<SelectedFile>),
    /// User clicked the generate button.
    SubmitClicked,
    /// The generation service accepted the file and produced documents.
    GenerationSucceeded(GenerationResult),
    /// The generation attempt failed; carries the message to show.
    GenerationFailed(String),
}
