//! codedeck - session core for a mobile code-editing shell
//!
//! Module layout:
//! - kernel: headless application core (state/action/effect)
//! - kernel::services: ports (FileStore, SurfaceTransport) and adapters
//!   (local file system, tokio runtime, settings persistence)
//! - logging: tracing setup
//!
//! The presentation layer dispatches [`kernel::Action`]s into a single
//! [`kernel::Store`], hands the returned [`kernel::Effect`]s to an
//! [`kernel::services::AsyncRuntime`], and drains completion actions from the
//! kernel bus back into the store on its own control thread. All state
//! mutation happens on that thread; I/O never touches shared state directly.

pub mod kernel;
pub mod logging;
