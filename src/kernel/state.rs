use crate::kernel::bridge::EditorBridge;
use crate::kernel::navigator::NavigatorState;
use crate::kernel::services::ports::AppSettings;
use crate::kernel::session::SessionState;

/// All kernel state, owned by exactly one [`crate::kernel::Store`] on the
/// control thread. Nothing in here is shared or locked.
#[derive(Debug, Default)]
pub struct AppState {
    pub navigator: NavigatorState,
    pub session: SessionState,
    pub bridge: EditorBridge,
    pub settings: AppSettings,
}
