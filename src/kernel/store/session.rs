use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_session_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::OpenPath { path, display_name } => {
                // already-open paths re-select without touching the disk
                if let Some(id) = self.state.session.find_by_path(&path) {
                    return super::DispatchResult::changed(self.state.session.select(id));
                }
                super::DispatchResult::effects(vec![Effect::ReadFile { path, display_name }])
            }
            Action::FileLoaded {
                path,
                display_name,
                content,
            } => {
                // open() re-checks the path: a second open may have raced
                // this read, and duplicates are never admitted
                self.state.session.open(path, display_name, content);
                super::DispatchResult::changed(true)
            }
            Action::CloseDocument(id) => {
                super::DispatchResult::changed(self.state.session.close(id))
            }
            Action::SelectDocument(id) => {
                super::DispatchResult::changed(self.state.session.select(id))
            }
            Action::UpdateContent { id, content } => {
                super::DispatchResult::changed(self.state.session.update_content(id, content))
            }
            Action::SaveActive => {
                let Some(doc) = self.state.session.active_document() else {
                    return super::DispatchResult::none();
                };
                super::DispatchResult::effects(vec![Effect::WriteFile {
                    id: doc.id,
                    path: doc.path.clone(),
                    content: doc.content.clone(),
                    version: doc.edit_version,
                }])
            }
            Action::FileSaved {
                id,
                version,
                success,
            } => {
                if !success {
                    // content stays in memory and dirty, ready for a retry
                    tracing::warn!(id = id.raw(), "save failed, document stays dirty");
                    return super::DispatchResult::none();
                }
                super::DispatchResult::changed(self.state.session.mark_saved(id, version))
            }
            _ => unreachable!("non-session action passed to reduce_session_action"),
        }
    }
}
