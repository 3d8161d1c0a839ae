mod navigator;
mod session;
mod surface;

use crate::kernel::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: false,
        }
    }
}

/// Single-writer state container. Reducers mutate state synchronously and
/// describe I/O as effects; after every action a bridge sync pass appends
/// whatever pushes the rendering surface needs to stay consistent with the
/// active document.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut result = match action {
            Action::NavigatorLoad(_)
            | Action::NavigateUp
            | Action::SelectEntry(_)
            | Action::ClearSelection
            | Action::CreateEntry { .. }
            | Action::DeleteEntry { .. }
            | Action::RenameEntry { .. }
            | Action::DirLoaded { .. }
            | Action::DirLoadError { .. }
            | Action::PathCreated { .. }
            | Action::PathDeleted { .. }
            | Action::PathRenamed { .. } => self.reduce_navigator_action(action),

            Action::OpenPath { .. }
            | Action::FileLoaded { .. }
            | Action::CloseDocument(_)
            | Action::SelectDocument(_)
            | Action::UpdateContent { .. }
            | Action::SaveActive
            | Action::FileSaved { .. } => self.reduce_session_action(action),

            Action::SurfaceAttached
            | Action::SurfaceReady
            | Action::SurfaceDetached
            | Action::SurfaceContentChanged(_) => self.reduce_surface_action(action),
        };

        let pushes = self
            .state
            .bridge
            .sync(self.state.session.active_document());
        result.effects.extend(pushes);

        result
    }
}
