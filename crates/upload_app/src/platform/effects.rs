use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use upload_core::{Effect, GeneratedFiles, GenerationResult, Msg};
use upload_engine::{EngineError, EngineEvent, EngineHandle, GeneratedDocuments, UploadRequest};

/// Shown if the engine goes away before answering.
const ENGINE_STOPPED_MESSAGE: &str = "upload engine stopped unexpectedly";

/// Executes core effects on the engine and turns engine events back into
/// messages for the controller.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Runs each effect and waits for its outcome. At most one submission is
    /// ever in flight, so waiting here is the whole event loop.
    pub(crate) fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut replies = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::SubmitFile { file } => {
                    engine_info!("SubmitFile name={} bytes={}", file.name(), file.len());
                    self.engine
                        .submit(UploadRequest::new(file.name(), file.content().to_vec()));
                    replies.push(self.wait_for_generation());
                }
                Effect::DropIgnored { file_name, reason } => {
                    engine_warn!(
                        "Drop of {} ignored while a request is in flight: {}",
                        file_name.as_deref().unwrap_or("<nothing>"),
                        reason
                    );
                }
            }
        }
        replies
    }

    fn wait_for_generation(&self) -> Msg {
        while let Some(event) = self.engine.recv() {
            if let EngineEvent::GenerationCompleted { file_name, result } = event {
                if let Err(err) = &result {
                    engine_warn!("Generation for {} failed: {}", file_name, err.kind);
                }
                return completion_to_msg(result);
            }
        }
        Msg::GenerationFailed(ENGINE_STOPPED_MESSAGE.to_string())
    }

    /// Fetches every locator into `dir`, returning one outcome per locator.
    pub(crate) fn download_all(
        &self,
        locators: &[&str],
        dir: &Path,
    ) -> Vec<(String, Result<PathBuf, EngineError>)> {
        for locator in locators {
            self.engine.download(*locator, dir);
        }
        let mut outcomes = Vec::with_capacity(locators.len());
        while outcomes.len() < locators.len() {
            match self.engine.recv() {
                Some(EngineEvent::DownloadCompleted { locator, result }) => {
                    outcomes.push((locator, result));
                }
                Some(EngineEvent::GenerationCompleted { .. }) => {}
                None => break,
            }
        }
        outcomes
    }
}

pub(crate) fn completion_to_msg(result: Result<GeneratedDocuments, EngineError>) -> Msg {
    match result {
        Ok(docs) => Msg::GenerationSucceeded(GenerationResult {
            job_id: docs.job_id,
            course_title: docs.course_title,
            files: GeneratedFiles {
                docx: docs.docx,
                md: docs.md,
            },
        }),
        Err(err) => Msg::GenerationFailed(err.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upload_engine::FailureKind;

    #[test]
    fn success_maps_to_generation_result() {
        let msg = completion_to_msg(Ok(GeneratedDocuments {
            job_id: Some("ab12".into()),
            course_title: "Intro to X".into(),
            docx: "/d.docx".into(),
            md: "/d.md".into(),
        }));

        assert_eq!(
            msg,
            Msg::GenerationSucceeded(GenerationResult {
                job_id: Some("ab12".into()),
                course_title: "Intro to X".into(),
                files: GeneratedFiles {
                    docx: "/d.docx".into(),
                    md: "/d.md".into(),
                },
            })
        );
    }

    #[test]
    fn ignored_drop_produces_no_reply() {
        let runner = EffectRunner::new(
            EngineHandle::new(upload_engine::EngineConfig::default()).unwrap(),
        );
        let replies = runner.run(vec![Effect::DropIgnored {
            file_name: Some("notes.csv".into()),
            reason: "Please upload a .xlsx file",
        }]);
        assert!(replies.is_empty());
    }

    #[test]
    fn failure_carries_user_message() {
        let msg = completion_to_msg(Err(EngineError {
            kind: FailureKind::Network,
            message: "Failed to fetch".into(),
        }));
        assert_eq!(msg, Msg::GenerationFailed("Failed to fetch".into()));
    }
}
