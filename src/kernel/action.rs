use std::path::PathBuf;

use compact_str::CompactString;

use crate::kernel::services::ports::FileEntry;
use crate::kernel::session::DocumentId;

/// Everything that can mutate kernel state goes through one of these.
///
/// Actions with a `request_id` / `version` field are completions of
/// previously issued effects; the reducers use those fields to discard
/// results that a newer operation has already superseded.
#[derive(Debug, Clone)]
pub enum Action {
    // explorer
    NavigatorLoad(PathBuf),
    NavigateUp,
    SelectEntry(FileEntry),
    ClearSelection,
    CreateEntry {
        name: CompactString,
        is_dir: bool,
    },
    DeleteEntry {
        path: PathBuf,
    },
    RenameEntry {
        path: PathBuf,
        new_name: CompactString,
    },
    DirLoaded {
        request_id: u64,
        path: PathBuf,
        entries: Vec<FileEntry>,
    },
    DirLoadError {
        request_id: u64,
        path: PathBuf,
        error: String,
    },
    PathCreated {
        parent: PathBuf,
        success: bool,
    },
    PathDeleted {
        path: PathBuf,
        success: bool,
    },
    PathRenamed {
        from: PathBuf,
        to: PathBuf,
        success: bool,
    },

    // documents
    OpenPath {
        path: PathBuf,
        display_name: CompactString,
    },
    FileLoaded {
        path: PathBuf,
        display_name: CompactString,
        content: String,
    },
    CloseDocument(DocumentId),
    SelectDocument(DocumentId),
    UpdateContent {
        id: DocumentId,
        content: String,
    },
    SaveActive,
    FileSaved {
        id: DocumentId,
        version: u64,
        success: bool,
    },

    // rendering surface
    SurfaceAttached,
    SurfaceReady,
    SurfaceDetached,
    SurfaceContentChanged(String),
}
