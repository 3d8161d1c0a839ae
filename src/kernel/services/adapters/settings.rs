use std::fs;
use std::path::PathBuf;

use crate::kernel::services::ports::AppSettings;

/// Loads and persists [`AppSettings`] as JSON under a fixed path.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Missing or unparsable files fall back to defaults.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "invalid settings, using defaults");
                AppSettings::default()
            }),
            Err(_) => AppSettings::default(),
        }
    }

    pub fn save(&self, settings: &AppSettings) -> bool {
        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let raw = match serde_json::to_string_pretty(settings) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "settings serialization failed");
                return false;
            }
        };

        match fs::write(&self.path, raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings write failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::services::ports::AppTheme;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("conf/settings.json"));

        let mut settings = AppSettings::default();
        settings.theme = AppTheme::Light;
        settings.font_size = 18;
        settings.auto_save = true;

        assert!(store.save(&settings));
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::new(path);
        assert_eq!(store.load(), AppSettings::default());
    }
}
