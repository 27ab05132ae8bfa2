use std::cell::RefCell;
use std::rc::Rc;

use upload_core::{
    AppViewModel, Effect, GeneratedFiles, GenerationResult, Msg, SelectedFile, UploadController,
    UploadPhase, UploadView,
};

/// Records every frame the controller renders.
#[derive(Clone, Default)]
struct RecordingView {
    frames: Rc<RefCell<Vec<AppViewModel>>>,
}

impl RecordingView {
    fn frames(&self) -> Vec<AppViewModel> {
        self.frames.borrow().clone()
    }

    fn last(&self) -> AppViewModel {
        self.frames.borrow().last().cloned().expect("at least one frame")
    }
}

impl UploadView for RecordingView {
    fn render(&mut self, view: &AppViewModel) {
        self.frames.borrow_mut().push(view.clone());
    }
}

fn sheet() -> SelectedFile {
    SelectedFile::new("course.xlsx", vec![1u8, 2, 3])
}

#[test]
fn construction_renders_idle_frame() {
    let view = RecordingView::default();
    let controller = UploadController::new(view.clone());

    assert_eq!(view.frames().len(), 1);
    assert_eq!(view.last().phase, UploadPhase::Idle);
    assert_eq!(controller.state().phase(), UploadPhase::Idle);
}

#[test]
fn unchanged_state_does_not_rerender() {
    let view = RecordingView::default();
    let mut controller = UploadController::new(view.clone());

    let effects = controller.dispatch(Msg::SubmitClicked);
    assert!(effects.is_empty());
    controller.dispatch(Msg::FilePicked(None));
    controller.dispatch(Msg::GenerationFailed("late".into()));
    assert_eq!(view.frames().len(), 1);
}

#[test]
fn submit_toggle_is_disabled_in_flight_and_reenabled_once() {
    let view = RecordingView::default();
    let mut controller = UploadController::new(view.clone());

    controller.dispatch(Msg::FileDropped(Some(sheet())));
    let effects = controller.dispatch(Msg::SubmitClicked);
    assert_eq!(effects, vec![Effect::SubmitFile { file: sheet() }]);
    assert!(!view.last().submit_enabled);

    controller.dispatch(Msg::GenerationFailed("Failed to fetch".into()));
    // A duplicate completion must not produce another frame.
    controller.dispatch(Msg::GenerationFailed("Failed to fetch".into()));

    let toggles: Vec<bool> = view.frames().iter().map(|f| f.submit_enabled).collect();
    assert_eq!(toggles, vec![false, true, false, true]);
    assert_eq!(view.last().status_text(), Some("Error: Failed to fetch"));
}

#[test]
fn success_frame_carries_links() {
    let view = RecordingView::default();
    let mut controller = UploadController::new(view.clone());

    controller.dispatch(Msg::FilePicked(Some(sheet())));
    controller.dispatch(Msg::SubmitClicked);
    controller.dispatch(Msg::GenerationSucceeded(GenerationResult {
        job_id: None,
        course_title: "Intro to X".into(),
        files: GeneratedFiles {
            docx: "/d.docx".into(),
            md: "/d.md".into(),
        },
    }));

    let last = view.last();
    assert_eq!(last.phase, UploadPhase::Success);
    let downloads = last.downloads.expect("downloads");
    assert_eq!(downloads.course_title, "Intro to X");
    assert_eq!(
        (downloads.docx_href.as_str(), downloads.md_href.as_str()),
        ("/d.docx", "/d.md")
    );
    assert_eq!(controller.view_model().phase, UploadPhase::Success);
}
