use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use codedeck::kernel::services::adapters::{AsyncRuntime, LocalFileStore};
use codedeck::kernel::services::bus::{kernel_bus, KernelBusReceiver};
use codedeck::kernel::services::ports::SurfaceTransport;
use codedeck::kernel::{Action, AppState, Store};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingSurface {
    scripts: Mutex<Vec<String>>,
}

impl RecordingSurface {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut self.scripts.lock().unwrap())
    }
}

impl SurfaceTransport for RecordingSurface {
    fn eval(&self, script: &str) {
        self.scripts.lock().unwrap().push(script.to_string());
    }
}

struct Harness {
    store: Store,
    runtime: AsyncRuntime,
    bus: KernelBusReceiver,
    surface: Arc<RecordingSurface>,
}

impl Harness {
    fn new(root: PathBuf) -> Self {
        let (tx, rx) = kernel_bus();
        let files = Arc::new(LocalFileStore::with_root(root));
        let runtime = AsyncRuntime::new(tx, files).unwrap();
        Self {
            store: Store::new(AppState::default()),
            runtime,
            bus: rx,
            surface: Arc::new(RecordingSurface::default()),
        }
    }

    fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        self.runtime.run_effects(result.effects);
    }

    /// Drains bus completions into the store until the predicate holds.
    fn pump_until(&mut self, what: &str, pred: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !pred(self.store.state()) {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .unwrap_or_else(|| panic!("timed out waiting for: {what}"));
            match self.bus.recv_timeout(remaining) {
                Ok(action) => self.dispatch(action),
                Err(e) => panic!("bus closed or timed out waiting for {what}: {e}"),
            }
        }
    }
}

#[test]
fn browse_open_edit_save_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("b.txt"), "notes").unwrap();
    let script_path = dir.path().join("a.py");
    fs::write(&script_path, "print(1)").unwrap();

    let mut h = Harness::new(dir.path().to_path_buf());

    // browse: directories first, then files, case-insensitive
    h.dispatch(Action::NavigatorLoad(dir.path().to_path_buf()));
    h.pump_until("listing", |s| !s.navigator.is_loading);
    let names: Vec<&str> = h
        .store
        .state()
        .navigator
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["src", "a.py", "b.txt"]);

    // open: tab appears once the read completes, classified by extension
    h.dispatch(Action::OpenPath {
        path: script_path.clone(),
        display_name: "a.py".into(),
    });
    h.pump_until("open", |s| s.session.active_document().is_some());
    let doc = h.store.state().session.active_document().unwrap();
    assert_eq!(doc.content, "print(1)");
    assert_eq!(doc.language_id, "python");
    assert!(!doc.dirty);

    // surface comes up and receives the already-active document
    h.runtime.attach_surface(Arc::clone(&h.surface) as Arc<dyn SurfaceTransport>);
    h.dispatch(Action::SurfaceAttached);
    assert!(h.surface.take().is_empty());
    h.dispatch(Action::SurfaceReady);
    assert_eq!(
        h.surface.take(),
        ["setContent('print(1)');", "setLanguage('python');"]
    );

    // a user edit arrives from the surface and is not pushed back
    h.dispatch(Action::SurfaceContentChanged("print(2)".to_string()));
    let doc = h.store.state().session.active_document().unwrap();
    assert_eq!(doc.content, "print(2)");
    assert!(doc.dirty);
    assert!(h.surface.take().is_empty());

    // save hits the disk and clears the dirty flag
    h.dispatch(Action::SaveActive);
    h.pump_until("save", |s| {
        s.session.active_document().is_some_and(|d| !d.dirty)
    });
    assert_eq!(fs::read_to_string(&script_path).unwrap(), "print(2)");

    // an echo of content the surface already holds changes nothing
    h.dispatch(Action::SurfaceContentChanged("print(2)".to_string()));
    assert!(!h.store.state().session.active_document().unwrap().dirty);
}

#[test]
fn create_and_rename_reach_disk_and_open_tabs() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path().to_path_buf());

    h.dispatch(Action::NavigatorLoad(dir.path().to_path_buf()));
    h.pump_until("listing", |s| !s.navigator.is_loading);

    // creation completes and the listing refreshes around it
    h.dispatch(Action::CreateEntry {
        name: "notes.txt".into(),
        is_dir: false,
    });
    h.pump_until("create", |s| {
        s.navigator.entries.iter().any(|e| e.name == "notes.txt")
    });
    assert!(dir.path().join("notes.txt").is_file());

    // open it, then rename it on disk; the tab follows the new path
    let old_path = dir.path().join("notes.txt");
    h.dispatch(Action::OpenPath {
        path: old_path.clone(),
        display_name: "notes.txt".into(),
    });
    h.pump_until("open", |s| s.session.active_document().is_some());

    h.dispatch(Action::RenameEntry {
        path: old_path.clone(),
        new_name: "journal.txt".into(),
    });
    h.pump_until("rename", |s| {
        s.navigator.entries.iter().any(|e| e.name == "journal.txt")
    });
    assert!(!old_path.exists());

    let doc = h.store.state().session.active_document().unwrap();
    assert_eq!(doc.path, dir.path().join("journal.txt"));
    assert_eq!(doc.display_name, "journal.txt");
}

#[test]
fn listing_failure_surfaces_an_error_and_recovers() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    let mut h = Harness::new(dir.path().to_path_buf());

    h.dispatch(Action::NavigatorLoad(dir.path().to_path_buf()));
    h.pump_until("listing", |s| !s.navigator.is_loading);
    assert_eq!(h.store.state().navigator.entries.len(), 1);

    // a missing directory lists as empty under the soft-fail contract
    h.dispatch(Action::NavigatorLoad(dir.path().join("gone")));
    h.pump_until("missing listing", |s| !s.navigator.is_loading);
    assert!(h.store.state().navigator.entries.is_empty());

    h.dispatch(Action::NavigatorLoad(dir.path().to_path_buf()));
    h.pump_until("recovery", |s| !s.navigator.entries.is_empty());
}
