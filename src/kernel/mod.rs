//! Headless application core (state/action/effect).

pub mod action;
pub mod bridge;
pub mod effect;
pub mod language;
pub mod navigator;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use bridge::{BridgePhase, EditorBridge};
pub use effect::Effect;
pub use language::classify;
pub use navigator::NavigatorState;
pub use session::{Document, DocumentId, SessionState};
pub use state::AppState;
pub use store::{DispatchResult, Store};
