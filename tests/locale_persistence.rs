//! Language preference persistence and translation fallback.

use guitarshop::i18n::{Locale, LocaleSettings, LocaleStore, resolve};
use guitarshop::theme::load_settings;

#[test]
/// What: A saved language survives a restart
///
/// - Input: Each locale set on one `LocaleSettings`, then a fresh one on the same file
/// - Output: The fresh instance starts in the saved locale
fn saved_locale_is_restored_on_next_start() {
    for locale in Locale::ALL {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        let mut settings = LocaleSettings::init(LocaleStore::new(path.clone()));
        settings.set_locale(locale).expect("persist");
        let restored = LocaleSettings::init(LocaleStore::new(path));
        assert_eq!(restored.current(), locale);
    }
}

#[test]
/// What: The settings parser and the locale store agree on every file
///
/// - Input: Files using the `language` key and the unrecognized `locale`/`lang` keys
/// - Output: Both readers report the same locale for each file
fn settings_parser_and_locale_store_agree() {
    for (contents, expected) in [
        ("language = al\n", Locale::Al),
        ("language = en\n", Locale::En),
        ("locale = al\n", Locale::BASELINE),
        ("lang = al\n", Locale::BASELINE),
    ] {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, contents).expect("write");
        let parsed = Locale::parse(&load_settings(&path).language).unwrap_or(Locale::BASELINE);
        let stored = LocaleSettings::init(LocaleStore::new(path)).current();
        assert_eq!(parsed, stored, "{contents}");
        assert_eq!(stored, expected, "{contents}");
    }
}

#[test]
fn missing_file_starts_in_baseline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = LocaleSettings::init(LocaleStore::new(dir.path().join("absent.conf")));
    assert_eq!(settings.current(), Locale::BASELINE);
}

#[test]
fn unknown_key_resolves_to_itself_in_every_locale() {
    for locale in Locale::ALL {
        assert_eq!(resolve(locale, "nonexistent.key"), "nonexistent.key");
    }
}

#[test]
fn known_keys_differ_between_languages() {
    assert_eq!(resolve(Locale::En, "app.pagination.next"), "Next");
    assert_ne!(
        resolve(Locale::Al, "app.pagination.next"),
        resolve(Locale::En, "app.pagination.next")
    );
}
