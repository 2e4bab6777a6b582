//! Translation tables and lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::i18n::Locale;
use crate::i18n::loader::load_table;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// Parsed tables for every supported locale, built on first use.
static TABLES: LazyLock<HashMap<Locale, TranslationMap>> = LazyLock::new(|| {
    Locale::ALL
        .iter()
        .map(|&locale| (locale, load_table(locale)))
        .collect()
});

/// What: Look up a translation in a translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "app.models.loading")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<&str>` containing the translation or `None` if not found
#[must_use]
pub fn translate<'a>(key: &str, translations: &'a TranslationMap) -> Option<&'a str> {
    translations.get(key).map(String::as_str)
}

/// What: Resolve display text for `key` in `locale`.
///
/// Inputs:
/// - `locale`: Supported locale
/// - `key`: Arbitrary lookup key
///
/// Output:
/// - Translated string, or `key` itself when the table has no entry
///
/// Details:
/// - Pure with respect to its inputs and the static tables; never fails.
/// - A missing key is logged at debug level so gaps stay discoverable
///   without flooding the log.
#[must_use]
pub fn resolve(locale: Locale, key: &str) -> String {
    if let Some(text) = TABLES.get(&locale).and_then(|map| translate(key, map)) {
        return text.to_string();
    }
    tracing::debug!(
        "Missing translation key: '{}' for locale '{}'. Returning key as-is.",
        key,
        locale
    );
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut translations = HashMap::new();
        translations.insert("app.brands.title".to_string(), "Brendet".to_string());

        assert_eq!(translate("app.brands.title", &translations), Some("Brendet"));
        assert_eq!(translate("app.help.title", &translations), None);
    }

    #[test]
    fn resolve_picks_the_locale_table() {
        assert_eq!(resolve(Locale::En, "app.pagination.next"), "Next");
        assert_eq!(resolve(Locale::Al, "app.pagination.next"), "Para");
    }

    #[test]
    /// What: Unknown keys come back unchanged in every locale
    ///
    /// - Input: A key absent from all tables
    /// - Output: The key itself, no panic
    fn resolve_falls_back_to_key() {
        for locale in Locale::ALL {
            assert_eq!(resolve(locale, "nonexistent.key"), "nonexistent.key");
            assert_eq!(resolve(locale, ""), "");
        }
    }
}
