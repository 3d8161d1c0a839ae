use std::path::Path;

/// Maps a file extension to the language identifier understood by the
/// rendering surface. Total: unknown and missing extensions are plaintext.
pub fn classify(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "kt" | "kts" => "kotlin",
        "java" => "java",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "xml" => "xml",
        "go" => "go",
        "rs" => "rust",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "md" | "markdown" => "markdown",
        "txt" => "plaintext",
        "sh" | "bash" => "bash",
        "sql" => "sql",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "gradle" => "groovy",
        _ => "plaintext",
    }
}

pub fn classify_path(path: &Path) -> &'static str {
    classify(path.extension().and_then(|s| s.to_str()).unwrap_or(""))
}
