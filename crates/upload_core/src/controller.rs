use crate::{update, AppState, AppViewModel, Effect, Msg};

/// Rendering seam for the controller. A browser page, a terminal or a test
/// double all implement this the same way: draw whatever the model says.
pub trait UploadView {
    fn render(&mut self, view: &AppViewModel);
}

/// One upload widget: owns the flow state and the view it drives.
///
/// Every input event goes through [`UploadController::dispatch`]; effects are
/// returned to the caller, which runs them and feeds the outcome back as a
/// message. The view is re-rendered only when a message changed something.
pub struct UploadController<V> {
    state: AppState,
    view: V,
}

impl<V: UploadView> UploadController<V> {
    pub fn new(mut view: V) -> Self {
        let state = AppState::new();
        view.render(&state.view());
        Self { state, view }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view.render(&state.view());
        }
        self.state = state;
        effects
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view_model(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
