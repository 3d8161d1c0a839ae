use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use compact_str::CompactString;

use crate::kernel::services::ports::{FileEntry, FileStore};

/// FileStore over the local file system.
///
/// Failures are absorbed into the port's soft-fail contract and logged at
/// `warn` so they stay observable.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new() -> Self {
        let root = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));
        Self { root }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_parent(&self, parent: &Path) -> PathBuf {
        if parent.as_os_str().is_empty() {
            self.root.clone()
        } else {
            parent.to_path_buf()
        }
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for LocalFileStore {
    fn list(&self, path: &Path) -> Vec<FileEntry> {
        let dir = self.resolve_parent(path);
        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "list failed");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let Ok(entry) = entry else { continue };
            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let path = entry.path();
            let is_dir = metadata.is_dir();
            let extension = if is_dir {
                None
            } else {
                path.extension()
                    .map(|s| CompactString::from(s.to_string_lossy()))
            };
            let modified_ms = metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);

            entries.push(FileEntry {
                name: CompactString::from(entry.file_name().to_string_lossy()),
                path,
                is_dir,
                extension,
                size: metadata.len(),
                modified_ms,
            });
        }
        entries
    }

    fn read(&self, path: &Path) -> String {
        match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "read failed, returning empty");
                String::new()
            }
        }
    }

    fn write(&self, path: &Path, content: &str) -> bool {
        match fs::write(path, content) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "write failed");
                false
            }
        }
    }

    fn create(&self, parent: &Path, name: &str, is_dir: bool) -> bool {
        let target = self.resolve_parent(parent).join(name);
        let result = if is_dir {
            fs::create_dir(&target)
        } else {
            fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
                .map(|_| ())
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %target.display(), error = %e, "create failed");
                false
            }
        }
    }

    fn delete(&self, path: &Path) -> bool {
        let result = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "delete failed");
                false
            }
        }
    }

    fn rename(&self, path: &Path, new_name: &str) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };

        let target = parent.join(new_name);
        match fs::rename(path, &target) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(from = %path.display(), to = %target.display(), error = %e, "rename failed");
                false
            }
        }
    }

    fn default_root_path(&self) -> PathBuf {
        self.root.clone()
    }
}
