//! Shared application settings (games root, patch-table URL).
//!
//! Resolution is a priority chain so the CLI flag always wins and a bare
//! invocation still does something sensible.

use std::path::PathBuf;

/// Canonical path to the settings file: `~/.config/switch-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("switch-shelf").join("settings.toml")
}

/// Resolve the games root:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.current_root` in `settings.toml`
/// 3. Current working directory
pub fn resolve_games_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    if let Some(path) = load_string_setting("library", "current_root") {
        return PathBuf::from(path);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a patch-table URL override: CLI flag first, then `catalog.url` in
/// `settings.toml`. `None` means the caller should use its built-in default
/// endpoint.
pub fn resolve_catalog_url(cli_override: Option<String>) -> Option<String> {
    cli_override.or_else(|| load_string_setting("catalog", "url"))
}

/// Read one string value from `settings.toml`, treating an empty string as
/// unset.
fn load_string_setting(table: &str, key: &str) -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(table)?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
