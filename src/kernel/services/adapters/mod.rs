//! Service adapters: concrete implementations of the ports.

pub mod file;
pub mod runtime;
pub mod settings;

pub use file::LocalFileStore;
pub use runtime::AsyncRuntime;
pub use settings::SettingsStore;
