use std::fs;
use std::io;
use std::path::Path;

use crate::theme::parsing::normalize_key;
use crate::theme::types::DEFAULT_ENDPOINT;

/// Skeleton settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Guitar shop settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# GraphQL endpoint serving brands, models and details\n\
endpoint = https://graphql-api-brown.vercel.app/api/graphql\n\
#\n\
# Display language: en (English) or al (Shqip). Changed from inside the app with L.\n\
language = en\n\
#\n\
# Timeout for a single catalog request, in seconds\n\
request_timeout_secs = 15\n";

/// What: Write the settings skeleton when the file is missing or empty.
///
/// Inputs:
/// - `path`: Settings file path.
///
/// Output:
/// - `Ok(true)` when the skeleton was written, `Ok(false)` when a non-empty file already exists.
///
/// # Errors
/// - Returns `Err` when the directory or file cannot be created.
pub fn ensure_settings_file(path: &Path) -> io::Result<bool> {
    let file_empty = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    if !file_empty {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    tracing::info!(path = %path.display(), endpoint = DEFAULT_ENDPOINT, "wrote default settings skeleton");
    Ok(true)
}

/// What: Persist one `key = value` setting, preserving other content.
///
/// Inputs:
/// - `path`: Settings file path.
/// - `key`: Normalized key to write.
/// - `value`: New value.
///
/// Output:
/// - `Ok(())` once the file has been rewritten.
///
/// # Errors
/// - Returns `Err` when the directory cannot be created or the file cannot be written.
///
/// Details:
/// - Every existing line for `key` is replaced; the key is appended when absent.
/// - Comments, blank lines and unrelated keys are kept verbatim.
pub fn save_setting(path: &Path, key: &str, value: &str) -> io::Result<()> {
    let mut lines: Vec<String> = match fs::read_to_string(path) {
        Ok(content) => content.lines().map(ToString::to_string).collect(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e),
    };
    let mut replaced = false;
    for line in &mut lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if let Some((kraw, _)) = trimmed.split_once('=')
            && normalize_key(kraw) == key
        {
            *line = format!("{key} = {value}");
            replaced = true;
        }
    }
    if !replaced {
        lines.push(format!("{key} = {value}"));
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut new_content = lines.join("\n");
    new_content.push('\n');
    fs::write(path, new_content)?;
    tracing::debug!(path = %path.display(), key, value, "[Persist] setting saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Saving a key rewrites only that key and keeps comments
    ///
    /// - Input: File with comment, endpoint, and language lines
    /// - Output: Language replaced in place, rest unchanged
    fn save_setting_replaces_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "# keep me\nendpoint = http://x\nLanguage = en\n").expect("write");
        save_setting(&path, "language", "al").expect("save");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "# keep me\nendpoint = http://x\nlanguage = al\n");
    }

    #[test]
    fn save_setting_creates_missing_file_and_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.conf");
        save_setting(&path, "language", "al").expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "language = al\n");
    }

    #[test]
    fn ensure_settings_file_writes_skeleton_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        assert!(ensure_settings_file(&path).expect("first"));
        assert!(!ensure_settings_file(&path).expect("second"));
        let s = crate::theme::load_settings(&path);
        assert_eq!(s.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(s.language, "en");
    }
}
