//! Internationalization helpers for CLI commands.

use guitarshop::i18n::{self, Locale, LocaleSettings, LocaleStore};

/// What: Language the CLI prints in.
///
/// Inputs:
/// - None (reads `settings.conf`).
///
/// Output:
/// - Saved language, or the baseline locale when none is saved or it is not recognized.
///
/// Details:
/// - Resolved once per process through the same store the TUI starts from.
pub fn cli_locale() -> Locale {
    use std::sync::OnceLock;

    static LOCALE: OnceLock<Locale> = OnceLock::new();

    *LOCALE.get_or_init(|| {
        LocaleSettings::init(LocaleStore::new(guitarshop::theme::settings_path())).current()
    })
}

/// What: Get a translation for CLI usage.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "app.cli.brands_heading").
///
/// Output:
/// - Translated string, or key itself if translation not found.
pub fn t(key: &str) -> String {
    i18n::resolve(cli_locale(), key)
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `key`: Dot-notation key.
/// - `args`: Format arguments.
///
/// Output:
/// - Formatted translated string.
pub fn t_fmt(key: &str, args: &[&dyn std::fmt::Display]) -> String {
    i18n::fmt_in(cli_locale(), key, args)
}

/// What: Get a translation with a single format argument.
///
/// Inputs:
/// - `key`: Dot-notation key.
/// - `arg`: Single format argument.
///
/// Output:
/// - Formatted translated string.
pub fn t_fmt1<T: std::fmt::Display>(key: &str, arg: T) -> String {
    t_fmt(key, &[&arg])
}
