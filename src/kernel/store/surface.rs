use crate::kernel::bridge::BridgePhase;
use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_surface_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SurfaceAttached => {
                self.state.bridge.attach();
                super::DispatchResult::changed(true)
            }
            Action::SurfaceReady => {
                // the sync pass after this reducer delivers the first push,
                // reflecting whichever document is active right now
                super::DispatchResult::changed(self.state.bridge.ready())
            }
            Action::SurfaceDetached => {
                self.state.bridge.detach();
                super::DispatchResult::changed(true)
            }
            Action::SurfaceContentChanged(content) => {
                if self.state.bridge.phase() != BridgePhase::Ready {
                    tracing::debug!("change notification from non-ready surface dropped");
                    return super::DispatchResult::none();
                }
                if self.state.bridge.is_echo(&content) {
                    return super::DispatchResult::none();
                }

                let Some(id) = self.state.session.active_id() else {
                    return super::DispatchResult::none();
                };

                // the surface holds this text already; record it so the
                // sync pass does not push it straight back
                self.state.bridge.note_surface_content(content.clone());
                super::DispatchResult::changed(self.state.session.update_content(id, content))
            }
            _ => unreachable!("non-surface action passed to reduce_surface_action"),
        }
    }
}
