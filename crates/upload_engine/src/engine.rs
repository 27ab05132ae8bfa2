use std::io;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::download::{ArtifactDownloader, DownloadSettings};
use crate::generate::{GenerateSettings, Generator, ReqwestGenerator};
use crate::{EngineEvent, UploadRequest};

/// Both halves of the engine pointed at the same service.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub generate: GenerateSettings,
    pub download: DownloadSettings,
}

impl EngineConfig {
    pub fn for_service(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            generate: GenerateSettings {
                base_url: base_url.clone(),
                ..GenerateSettings::default()
            },
            download: DownloadSettings {
                base_url,
                ..DownloadSettings::default()
            },
        }
    }
}

enum EngineCommand {
    Generate(UploadRequest),
    Download { locator: String, output_dir: PathBuf },
}

/// Runs requests on a background tokio runtime so the caller's thread never
/// blocks on the network. Requests are never cancelled once queued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        Self::with_generator(
            Arc::new(ReqwestGenerator::new(config.generate)),
            ArtifactDownloader::new(config.download),
        )
    }

    pub fn with_generator(
        generator: Arc<dyn Generator>,
        downloader: ArtifactDownloader,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let downloader = Arc::new(downloader);

        thread::Builder::new()
            .name("upload-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let generator = generator.clone();
                    let downloader = downloader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event =
                            handle_command(generator.as_ref(), downloader.as_ref(), command).await;
                        let _ = event_tx.send(event);
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request: UploadRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Generate(request));
    }

    pub fn download(&self, locator: impl Into<String>, output_dir: &Path) {
        let _ = self.cmd_tx.send(EngineCommand::Download {
            locator: locator.into(),
            output_dir: output_dir.to_path_buf(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    generator: &dyn Generator,
    downloader: &ArtifactDownloader,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Generate(request) => {
            let result = generator.generate(&request).await;
            EngineEvent::GenerationCompleted {
                file_name: request.file_name,
                result,
            }
        }
        EngineCommand::Download {
            locator,
            output_dir,
        } => {
            let result = downloader.download(&locator, &output_dir).await;
            EngineEvent::DownloadCompleted { locator, result }
        }
    }
}
