use std::fs;
use std::path::Path;

use crate::theme::parsing::split_setting_line;
use crate::theme::types::Settings;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are ignored; malformed numbers keep the previous value.
/// - Later lines win over earlier ones.
/// - The language is read only from the `language` key, the same key the locale store
///   writes, so the CLI and the TUI agree on it.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_setting_line(line) else {
            continue;
        };
        match key.as_str() {
            "endpoint" | "graphql_endpoint" | "api_url" => {
                if !val.is_empty() {
                    settings.endpoint = val.to_string();
                }
            }
            crate::i18n::LANGUAGE_KEY => {
                settings.language = val.to_string();
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            _ => {}
        }
    }
}

/// What: Load settings from a file, falling back to defaults.
///
/// Inputs:
/// - `path`: Settings file path.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut settings),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings not readable; using defaults");
        }
    }
    settings
}

/// Settings from the default location (`~/.config/guitarshop/settings.conf`).
#[must_use]
pub fn settings() -> Settings {
    load_settings(&crate::theme::settings_path())
}

/// What: Read the raw value of one key from a settings file.
///
/// Inputs:
/// - `path`: Settings file path.
/// - `key`: Normalized key to look for.
///
/// Output:
/// - `Some(value)` from the last matching line; `None` if the file or key is absent.
#[must_use]
pub fn read_setting(path: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .filter_map(split_setting_line)
        .filter(|(k, _)| k == key)
        .last()
        .map(|(_, v)| v.to_string())
}
