use std::path::PathBuf;

use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_navigator_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::NavigatorLoad(path) => self.begin_dir_load(path),
            Action::NavigateUp => match self.state.navigator.parent_path() {
                Some(parent) => self.begin_dir_load(parent),
                None => super::DispatchResult::none(),
            },
            Action::SelectEntry(entry) => {
                super::DispatchResult::changed(self.state.navigator.select(entry))
            }
            Action::ClearSelection => {
                super::DispatchResult::changed(self.state.navigator.clear_selection())
            }
            Action::CreateEntry { name, is_dir } => {
                if name.trim().is_empty() {
                    return super::DispatchResult::none();
                }
                super::DispatchResult::effects(vec![Effect::CreatePath {
                    parent: self.state.navigator.current_path.clone(),
                    name,
                    is_dir,
                }])
            }
            Action::DeleteEntry { path } => {
                let deselected = self
                    .state
                    .navigator
                    .selected
                    .as_ref()
                    .is_some_and(|e| e.path == path);
                if deselected {
                    self.state.navigator.clear_selection();
                }
                super::DispatchResult {
                    effects: vec![Effect::DeletePath { path }],
                    state_changed: deselected,
                }
            }
            Action::RenameEntry { path, new_name } => {
                let unchanged = path
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy() == new_name.as_str());
                if new_name.trim().is_empty() || unchanged {
                    return super::DispatchResult::none();
                }
                super::DispatchResult::effects(vec![Effect::RenamePath { path, new_name }])
            }
            Action::DirLoaded {
                request_id,
                path,
                entries,
            } => super::DispatchResult::changed(
                self.state
                    .navigator
                    .apply_dir_loaded(request_id, path, entries),
            ),
            Action::DirLoadError {
                request_id,
                path,
                error,
            } => {
                tracing::warn!(path = %path.display(), error = %error, "directory load failed");
                super::DispatchResult::changed(
                    self.state.navigator.apply_dir_load_error(request_id, error),
                )
            }
            Action::PathCreated { parent, success } => {
                if !success {
                    tracing::warn!(parent = %parent.display(), "create failed");
                }
                // reflect on-disk truth whether or not the mutation stuck
                self.reload_current_dir()
            }
            Action::PathDeleted { path, success } => {
                if !success {
                    tracing::warn!(path = %path.display(), "delete failed");
                }
                self.reload_current_dir()
            }
            Action::PathRenamed { from, to, success } => {
                let mut result = if success {
                    super::DispatchResult::changed(
                        self.state.session.apply_path_renamed(&from, &to),
                    )
                } else {
                    tracing::warn!(from = %from.display(), to = %to.display(), "rename failed");
                    super::DispatchResult::none()
                };

                let reload = self.reload_current_dir();
                result.effects.extend(reload.effects);
                result.state_changed |= reload.state_changed;
                result
            }
            _ => unreachable!("non-navigator action passed to reduce_navigator_action"),
        }
    }

    fn begin_dir_load(&mut self, path: PathBuf) -> super::DispatchResult {
        let request_id = self.state.navigator.begin_load();
        super::DispatchResult {
            effects: vec![Effect::LoadDir { request_id, path }],
            state_changed: true,
        }
    }

    fn reload_current_dir(&mut self) -> super::DispatchResult {
        let path = self.state.navigator.current_path.clone();
        self.begin_dir_load(path)
    }
}
