use std::path::{Path, PathBuf};

use compact_str::CompactString;

/// Immutable listing snapshot; recreated on every load, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: CompactString,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Present only for files.
    pub extension: Option<CompactString>,
    pub size: u64,
    pub modified_ms: u64,
}

/// Storage backend behind the explorer and the document session.
///
/// Soft-fail contract: `list` returns empty for missing or non-directory
/// paths, `read` returns empty for missing or unreadable files (an empty
/// file and a failed read are indistinguishable here, by contract), and
/// mutations report plain success. Mutations are fire-and-report: nothing
/// is rolled back on partial failure.
pub trait FileStore: Send + Sync {
    fn list(&self, path: &Path) -> Vec<FileEntry>;

    fn read(&self, path: &Path) -> String;

    fn write(&self, path: &Path, content: &str) -> bool;

    /// An empty `parent` means the default root.
    fn create(&self, parent: &Path, name: &str, is_dir: bool) -> bool;

    /// Recursive for directories.
    fn delete(&self, path: &Path) -> bool;

    /// Renames within the same parent; moving between directories is not
    /// supported.
    fn rename(&self, path: &Path, new_name: &str) -> bool;

    fn default_root_path(&self) -> PathBuf;
}
