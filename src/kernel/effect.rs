use std::path::PathBuf;

use compact_str::CompactString;

use crate::kernel::session::DocumentId;

/// I/O requested by a reducer. Executed by the runtime adapter off the
/// control thread; completions come back as actions over the kernel bus.
#[derive(Debug, Clone)]
pub enum Effect {
    LoadDir {
        request_id: u64,
        path: PathBuf,
    },
    ReadFile {
        path: PathBuf,
        display_name: CompactString,
    },
    WriteFile {
        id: DocumentId,
        path: PathBuf,
        content: String,
        version: u64,
    },
    CreatePath {
        parent: PathBuf,
        name: CompactString,
        is_dir: bool,
    },
    DeletePath {
        path: PathBuf,
    },
    RenamePath {
        path: PathBuf,
        new_name: CompactString,
    },
    SurfaceEval(String),
}
