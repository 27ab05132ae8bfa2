//! Upload engine: talks to the generation service and stores what it returns.
mod download;
mod engine;
mod filename;
mod generate;
mod store;
mod types;
mod wire;

pub use download::{ArtifactDownloader, DownloadSettings};
pub use engine::{EngineConfig, EngineHandle};
pub use filename::artifact_filename;
pub use generate::{GenerateSettings, Generator, ReqwestGenerator, GENERIC_FAILURE_MESSAGE};
pub use store::{ArtifactStore, StoreError};
pub use types::{EngineError, EngineEvent, FailureKind, GeneratedDocuments, UploadRequest};
