//! Upload core: pure state machine, view model and controller for the
//! spreadsheet upload flow.
mod controller;
mod effect;
mod file;
mod msg;
mod state;
mod update;
mod view_model;

pub use controller::{UploadController, UploadView};
pub use effect::Effect;
pub use file::{GeneratedFiles, GenerationResult, SelectedFile, SPREADSHEET_EXTENSION};
pub use msg::Msg;
pub use state::{AppState, UploadPhase};
pub use update::{update, DROP_REJECTED_MESSAGE};
pub use view_model::{
    AppViewModel, DownloadsView, StatusTone, StatusView, PROCESSING_TEXT, SUCCESS_TEXT,
};
