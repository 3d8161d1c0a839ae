use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    Light,
    Dark,
    System,
}

/// Shell preferences, persisted as JSON by the settings adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: AppTheme,
    pub editor_theme: CompactString,
    pub font_size: u16,
    pub word_wrap: bool,
    pub show_line_numbers: bool,
    pub auto_save: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: AppTheme::Dark,
            editor_theme: "monokai".into(),
            font_size: 14,
            word_wrap: true,
            show_line_numbers: true,
            auto_save: false,
        }
    }
}
