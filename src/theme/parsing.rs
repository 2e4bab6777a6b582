/// What: Normalize a settings key so spelling variants match.
///
/// Inputs:
/// - `raw`: Key text left of `=`.
///
/// Output:
/// - Lowercased key with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Strip trailing comments from a configuration value fragment.
///
/// Inputs:
/// - `s`: Raw value text possibly containing inline comments.
///
/// Output:
/// - Slice of the input with trailing comments and whitespace removed.
///
/// Details:
/// - Strips a trailing ` #` section. URLs keep their `//` and `#` fragments
///   because only a `#` preceded by whitespace starts a comment.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Split a settings line into normalized key and cleaned value.
///
/// Inputs:
/// - `line`: One line of `settings.conf`.
///
/// Output:
/// - `Some((key, value))` for `key = value` lines; `None` for blanks, comments and junk.
pub(crate) fn split_setting_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = normalize_key(raw_key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_inline_comment_keeps_urls_intact() {
        assert_eq!(
            strip_inline_comment(" https://example.com/api#frag "),
            "https://example.com/api#frag"
        );
        assert_eq!(strip_inline_comment("al # albanian"), "al");
        assert_eq!(strip_inline_comment("# all comment"), "");
    }

    #[test]
    fn split_setting_line_normalizes_keys() {
        assert_eq!(
            split_setting_line("Request-Timeout Secs = 30"),
            Some(("request_timeout_secs".to_string(), "30"))
        );
        assert_eq!(split_setting_line("# language = al"), None);
        assert_eq!(split_setting_line("no equals sign"), None);
        assert_eq!(split_setting_line(" = value"), None);
    }
}
