//! Service ports: traits + data contracts.

pub mod file;
pub mod settings;
pub mod surface;

pub use file::{FileEntry, FileStore};
pub use settings::{AppSettings, AppTheme};
pub use surface::SurfaceTransport;
