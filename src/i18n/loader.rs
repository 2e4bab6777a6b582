//! Locale table loading and parsing.

use std::collections::HashMap;

use crate::i18n::Locale;
use crate::i18n::translations::TranslationMap;

/// English table, embedded at build time.
const EN_YAML: &str = include_str!("../../config/locales/en.yml");
/// Albanian table, embedded at build time.
const AL_YAML: &str = include_str!("../../config/locales/al.yml");

/// What: Return the raw YAML source shipped for a locale.
///
/// Inputs:
/// - `locale`: Supported locale
///
/// Output:
/// - Static YAML text.
const fn locale_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_YAML,
        Locale::Al => AL_YAML,
    }
}

/// What: Build the translation table for a locale from its embedded YAML.
///
/// Inputs:
/// - `locale`: Supported locale
///
/// Output:
/// - Flattened `TranslationMap`; empty when the YAML cannot be parsed.
///
/// Details:
/// - A broken table is logged and degrades to an empty map, so every lookup
///   falls back to the key itself instead of failing.
#[must_use]
pub fn load_table(locale: Locale) -> TranslationMap {
    match parse_locale_yaml(locale_source(locale)) {
        Ok(map) => {
            tracing::debug!(locale = %locale, keys = map.len(), "loaded translation table");
            map
        }
        Err(e) => {
            tracing::warn!(locale = %locale, error = %e, "translation table unusable; keys will be shown raw");
            HashMap::new()
        }
    }
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// # Errors
/// - Returns `Err` when the content is not valid YAML
///
/// Details:
/// - Expects a single top-level key naming the locale (e.g. `en:`), which is
///   skipped; everything below is flattened into dot-notation keys.
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "app.models")
/// - `translations`: Map to populate
///
/// Details:
/// - Strings become entries; numbers and booleans are stored in their text form.
/// - Sequences and nulls carry no display text and are skipped.
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, translations: &mut TranslationMap) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flattens_nested_keys_under_locale_root() {
        let yaml = "en:\n  app:\n    models:\n      loading: \"Loading models...\"\n    pages: 3\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(
            map.get("app.models.loading").map(String::as_str),
            Some("Loading models...")
        );
        assert_eq!(map.get("app.pages").map(String::as_str), Some("3"));
    }

    #[test]
    fn parse_rejects_broken_yaml() {
        assert!(parse_locale_yaml("en: [unclosed").is_err());
    }

    #[test]
    /// What: Shipped tables parse and define the same key set
    ///
    /// - Input: Embedded English and Albanian YAML
    /// - Output: Non-empty maps with identical keys
    fn shipped_tables_are_complete_and_aligned() {
        let en = load_table(Locale::En);
        let al = load_table(Locale::Al);
        assert!(en.contains_key("app.models.loading"));
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut al_keys: Vec<_> = al.keys().collect();
        en_keys.sort();
        al_keys.sort();
        assert_eq!(en_keys, al_keys);
    }
}
