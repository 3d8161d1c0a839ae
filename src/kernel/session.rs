use std::path::{Path, PathBuf};

use compact_str::CompactString;

use crate::kernel::language;

/// Opaque document handle. Allocated once per open, never reused, and
/// independent of the file path so renames do not disturb identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

impl DocumentId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One open tab: the authoritative buffer for a file being edited.
#[derive(Debug)]
pub struct Document {
    pub id: DocumentId,
    pub path: PathBuf,
    pub display_name: CompactString,
    pub content: String,
    pub language_id: &'static str,
    pub dirty: bool,
    pub cursor_offset: usize,
    /// Bumped on every content change; save completions carry the version
    /// they wrote so a slow write never clears the dirty flag over newer
    /// edits.
    pub edit_version: u64,
}

/// Open documents in tab order plus the active-document pointer.
///
/// Invariants: at most one document per path, and `active_id` (when set)
/// always references a present document.
#[derive(Debug, Default)]
pub struct SessionState {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
}

impl SessionState {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn active_document(&self) -> Option<&Document> {
        let id = self.active_id?;
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.documents.iter().find(|d| d.path == path).map(|d| d.id)
    }

    /// Appends a document and makes it active in one step. If the path is
    /// already open (a second open raced the first read) the existing
    /// document is re-selected instead.
    pub fn open(&mut self, path: PathBuf, display_name: CompactString, content: String) -> DocumentId {
        if let Some(existing) = self.find_by_path(&path) {
            self.active_id = Some(existing);
            return existing;
        }

        self.next_id += 1;
        let id = DocumentId(self.next_id);
        let language_id = language::classify_path(&path);

        self.documents.push(Document {
            id,
            path,
            display_name,
            content,
            language_id,
            dirty: false,
            cursor_offset: 0,
            edit_version: 0,
        });
        self.active_id = Some(id);
        id
    }

    /// Removes a document. When the active one goes away, the last document
    /// remaining in tab order becomes active. Unknown ids are no-ops.
    pub fn close(&mut self, id: DocumentId) -> bool {
        let Some(index) = self.documents.iter().position(|d| d.id == id) else {
            return false;
        };

        self.documents.remove(index);
        if self.active_id == Some(id) {
            self.active_id = self.documents.last().map(|d| d.id);
        }
        true
    }

    pub fn select(&mut self, id: DocumentId) -> bool {
        if self.documents.iter().all(|d| d.id != id) {
            return false;
        }
        let changed = self.active_id != Some(id);
        self.active_id = Some(id);
        changed
    }

    /// Replaces content and marks the document dirty, even when the new
    /// content equals the old (preserved behavior). Unknown ids are no-ops.
    pub fn update_content(&mut self, id: DocumentId, content: String) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };

        doc.content = content;
        doc.dirty = true;
        doc.edit_version += 1;
        true
    }

    /// Clears the dirty flag after a successful write, but only when no
    /// edit landed while the write was in flight.
    pub fn mark_saved(&mut self, id: DocumentId, version: u64) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };

        if doc.edit_version != version {
            tracing::debug!(id = id.raw(), "save completed over newer edits, staying dirty");
            return false;
        }
        let changed = doc.dirty;
        doc.dirty = false;
        changed
    }

    /// Follows an explorer rename: documents under the renamed path keep
    /// their identity but track the new location and display name.
    pub fn apply_path_renamed(&mut self, from: &Path, to: &Path) -> bool {
        let mut changed = false;
        for doc in &mut self.documents {
            let new_path = if doc.path == from {
                Some(to.to_path_buf())
            } else if let Ok(rel) = doc.path.strip_prefix(from) {
                Some(to.join(rel))
            } else {
                None
            };

            if let Some(new_path) = new_path {
                doc.display_name = new_path
                    .file_name()
                    .map(|s| CompactString::from(s.to_string_lossy()))
                    .unwrap_or(doc.display_name.clone());
                doc.path = new_path;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(session: &mut SessionState, path: &str) -> DocumentId {
        let name = Path::new(path).file_name().unwrap().to_string_lossy();
        session.open(PathBuf::from(path), name.into(), String::new())
    }

    #[test]
    fn open_same_path_reselects_existing() {
        let mut session = SessionState::default();
        let a = open(&mut session, "/root/a.rs");
        let b = open(&mut session, "/root/b.rs");
        assert_eq!(session.active_id(), Some(b));

        let again = open(&mut session, "/root/a.rs");
        assert_eq!(again, a);
        assert_eq!(session.documents().len(), 2);
        assert_eq!(session.active_id(), Some(a));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut session = SessionState::default();
        let a = open(&mut session, "/root/a.rs");
        session.close(a);
        let b = open(&mut session, "/root/a.rs");
        assert_ne!(a, b);
    }

    #[test]
    fn closing_active_middle_tab_activates_last_remaining() {
        let mut session = SessionState::default();
        let _a = open(&mut session, "/root/a.rs");
        let b = open(&mut session, "/root/b.rs");
        let c = open(&mut session, "/root/c.rs");

        session.select(b);
        session.close(b);
        assert_eq!(session.active_id(), Some(c));
    }

    #[test]
    fn closing_active_last_tab_activates_previous() {
        let mut session = SessionState::default();
        let _a = open(&mut session, "/root/a.rs");
        let b = open(&mut session, "/root/b.rs");
        let c = open(&mut session, "/root/c.rs");

        session.close(c);
        assert_eq!(session.active_id(), Some(b));
    }

    #[test]
    fn closing_inactive_keeps_active() {
        let mut session = SessionState::default();
        let a = open(&mut session, "/root/a.rs");
        let b = open(&mut session, "/root/b.rs");

        session.close(a);
        assert_eq!(session.active_id(), Some(b));
    }

    #[test]
    fn closing_last_clears_active() {
        let mut session = SessionState::default();
        let a = open(&mut session, "/root/a.rs");
        session.close(a);
        assert_eq!(session.active_id(), None);
        assert!(session.documents().is_empty());
    }

    #[test]
    fn close_unknown_id_is_noop() {
        let mut session = SessionState::default();
        let a = open(&mut session, "/root/a.rs");
        assert!(session.close(a));
        assert!(!session.close(a));
    }

    #[test]
    fn update_marks_dirty_even_when_unchanged() {
        let mut session = SessionState::default();
        let id = session.open(PathBuf::from("/root/a.rs"), "a.rs".into(), "x".to_string());
        assert!(!session.document(id).unwrap().dirty);

        session.update_content(id, "x".to_string());
        assert!(session.document(id).unwrap().dirty);
    }

    #[test]
    fn save_clears_dirty_only_for_matching_version() {
        let mut session = SessionState::default();
        let id = open(&mut session, "/root/a.rs");
        session.update_content(id, "one".to_string());
        let saved_version = session.document(id).unwrap().edit_version;

        // an edit lands while the write is in flight
        session.update_content(id, "two".to_string());
        assert!(!session.mark_saved(id, saved_version));
        assert!(session.document(id).unwrap().dirty);

        let newer = session.document(id).unwrap().edit_version;
        assert!(session.mark_saved(id, newer));
        assert!(!session.document(id).unwrap().dirty);
    }

    #[test]
    fn language_classified_at_open() {
        let mut session = SessionState::default();
        let id = open(&mut session, "/root/a.py");
        assert_eq!(session.document(id).unwrap().language_id, "python");
    }

    #[test]
    fn rename_keeps_identity_and_updates_path() {
        let mut session = SessionState::default();
        let id = open(&mut session, "/root/old.rs");

        assert!(session.apply_path_renamed(Path::new("/root/old.rs"), Path::new("/root/new.rs")));
        let doc = session.document(id).unwrap();
        assert_eq!(doc.path, PathBuf::from("/root/new.rs"));
        assert_eq!(doc.display_name, "new.rs");
    }

    #[test]
    fn rename_of_parent_directory_moves_children() {
        let mut session = SessionState::default();
        let id = open(&mut session, "/root/dir/a.rs");

        assert!(session.apply_path_renamed(Path::new("/root/dir"), Path::new("/root/dir2")));
        assert_eq!(
            session.document(id).unwrap().path,
            PathBuf::from("/root/dir2/a.rs")
        );
    }
}
