use std::io;
use std::sync::{Arc, Mutex};

use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::services::ports::{FileStore, SurfaceTransport};
use crate::kernel::{Action, Effect};

/// Executes kernel effects off the control thread.
///
/// File-store calls run on tokio via `spawn_blocking`; every completion is
/// sent back over the kernel bus as an action, so results only ever touch
/// state once the control thread dispatches them. Surface scripts go to
/// whichever transport is currently attached (at most one).
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    bus: KernelBusSender,
    files: Arc<dyn FileStore>,
    surface: Mutex<Option<Arc<dyn SurfaceTransport>>>,
}

impl AsyncRuntime {
    pub fn new(bus: KernelBusSender, files: Arc<dyn FileStore>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;

        Ok(Self {
            runtime,
            bus,
            files,
            surface: Mutex::new(None),
        })
    }

    /// Wires up a freshly instantiated rendering surface. Pair with a
    /// `SurfaceAttached` dispatch.
    pub fn attach_surface(&self, transport: Arc<dyn SurfaceTransport>) {
        *self.surface.lock().expect("surface lock poisoned") = Some(transport);
    }

    /// Pair with a `SurfaceDetached` dispatch.
    pub fn detach_surface(&self) {
        *self.surface.lock().expect("surface lock poisoned") = None;
    }

    pub fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LoadDir { request_id, path } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let list_path = path.clone();
                    let result =
                        tokio::task::spawn_blocking(move || files.list(&list_path)).await;
                    let action = match result {
                        Ok(entries) => Action::DirLoaded {
                            request_id,
                            path,
                            entries,
                        },
                        Err(e) => Action::DirLoadError {
                            request_id,
                            path,
                            error: e.to_string(),
                        },
                    };
                    let _ = bus.send(action);
                });
            }
            Effect::ReadFile { path, display_name } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let read_path = path.clone();
                    let content = tokio::task::spawn_blocking(move || files.read(&read_path))
                        .await
                        .unwrap_or_default();
                    let _ = bus.send(Action::FileLoaded {
                        path,
                        display_name,
                        content,
                    });
                });
            }
            Effect::WriteFile {
                id,
                path,
                content,
                version,
            } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let success =
                        tokio::task::spawn_blocking(move || files.write(&path, &content))
                            .await
                            .unwrap_or(false);
                    let _ = bus.send(Action::FileSaved {
                        id,
                        version,
                        success,
                    });
                });
            }
            Effect::CreatePath {
                parent,
                name,
                is_dir,
            } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let create_parent = parent.clone();
                    let success = tokio::task::spawn_blocking(move || {
                        files.create(&create_parent, &name, is_dir)
                    })
                    .await
                    .unwrap_or(false);
                    let _ = bus.send(Action::PathCreated { parent, success });
                });
            }
            Effect::DeletePath { path } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let delete_path = path.clone();
                    let success =
                        tokio::task::spawn_blocking(move || files.delete(&delete_path))
                            .await
                            .unwrap_or(false);
                    let _ = bus.send(Action::PathDeleted { path, success });
                });
            }
            Effect::RenamePath { path, new_name } => {
                let bus = self.bus.clone();
                let files = Arc::clone(&self.files);
                self.runtime.spawn(async move {
                    let Some(parent) = path.parent() else {
                        let to = path.clone();
                        let _ = bus.send(Action::PathRenamed {
                            from: path,
                            to,
                            success: false,
                        });
                        return;
                    };
                    let to = parent.join(new_name.as_str());

                    let rename_path = path.clone();
                    let success = tokio::task::spawn_blocking(move || {
                        files.rename(&rename_path, &new_name)
                    })
                    .await
                    .unwrap_or(false);
                    let _ = bus.send(Action::PathRenamed {
                        from: path,
                        to,
                        success,
                    });
                });
            }
            Effect::SurfaceEval(script) => {
                let transport = self.surface.lock().expect("surface lock poisoned").clone();
                match transport {
                    Some(transport) => transport.eval(&script),
                    // pushes are re-derived from state on the next ready
                    // surface, so dropping here loses nothing
                    None => tracing::debug!("surface eval with no transport attached"),
                }
            }
        }
    }
}
