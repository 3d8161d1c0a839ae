use std::path::PathBuf;

use crate::kernel::services::ports::FileEntry;

/// Explorer state: one directory listing at a time.
///
/// An empty `current_path` means no root has been chosen yet, which is
/// distinct from the file system root. Listings are applied through
/// monotonically numbered load requests so that a slow listing can never
/// overwrite the result of one issued after it.
#[derive(Debug, Default)]
pub struct NavigatorState {
    pub current_path: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected: Option<FileEntry>,
    pub is_loading: bool,
    pub error: Option<String>,
    load_seq: u64,
}

impl NavigatorState {
    /// Starts a new load and returns its request id. Any in-flight load
    /// with a lower id becomes stale.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.is_loading = true;
        self.error = None;
        self.load_seq
    }

    /// Applies a finished listing. Returns false for stale results, which
    /// are discarded without touching state (last-request-wins).
    pub fn apply_dir_loaded(
        &mut self,
        request_id: u64,
        path: PathBuf,
        mut entries: Vec<FileEntry>,
    ) -> bool {
        if request_id != self.load_seq {
            tracing::debug!(request_id, current = self.load_seq, "stale listing discarded");
            return false;
        }

        sort_entries(&mut entries);
        self.current_path = path;
        self.entries = entries;
        self.is_loading = false;
        true
    }

    pub fn apply_dir_load_error(&mut self, request_id: u64, error: String) -> bool {
        if request_id != self.load_seq {
            return false;
        }

        self.entries.clear();
        self.error = Some(error);
        self.is_loading = false;
        true
    }

    pub fn select(&mut self, entry: FileEntry) -> bool {
        let changed = self.selected.as_ref() != Some(&entry);
        self.selected = Some(entry);
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Parent of the current directory, or None when rootless or already at
    /// the top of the hierarchy.
    pub fn parent_path(&self) -> Option<PathBuf> {
        if self.current_path.as_os_str().is_empty() {
            return None;
        }
        self.current_path.parent().map(|p| p.to_path_buf())
    }
}

/// Directories before files; case-insensitive by name within each group.
fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
}
