use crate::{AppState, Effect, Msg, UploadPhase};

/// Message shown when a dropped payload is not a spreadsheet.
pub const DROP_REJECTED_MESSAGE: &str = "Please upload a .xlsx file";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragEntered => {
            state.set_drop_highlight(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drop_highlight(false);
            Vec::new()
        }
        Msg::FileDropped(candidate) => {
            state.set_drop_highlight(false);
            match candidate {
                Some(file) if file.has_spreadsheet_extension() => {
                    state.select_file(file);
                    Vec::new()
                }
                // A request in flight owns the status panel until it settles.
                candidate if state.is_submitting() => vec![Effect::DropIgnored {
                    file_name: candidate.map(|file| file.name().to_string()),
                    reason: DROP_REJECTED_MESSAGE,
                }],
                _ => {
                    state.show_error(DROP_REJECTED_MESSAGE);
                    Vec::new()
                }
            }
        }
        Msg::FilePicked(candidate) => {
            if let Some(file) = candidate {
                state.select_file(file);
            }
            Vec::new()
        }
        Msg::SubmitClicked => match state.begin_submission() {
            Some(file) => vec![Effect::SubmitFile { file }],
            None => Vec::new(),
        },
        Msg::GenerationSucceeded(result) => {
            if state.phase() == UploadPhase::Submitting {
                state.apply_success(result);
            }
            Vec::new()
        }
        Msg::GenerationFailed(message) => {
            if state.phase() == UploadPhase::Submitting {
                state.show_error(message);
            }
            Vec::new()
        }
    };

    (state, effects)
}
