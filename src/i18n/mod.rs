//! Internationalization (i18n) module for the guitar shop catalog.
//!
//! This module provides the supported locales, the embedded translation tables,
//! translation lookup, and the persisted language preference.
//!
//! # Overview
//!
//! - **Locales**: A closed set ([`Locale::En`] is the baseline, [`Locale::Al`] is Albanian)
//! - **Tables**: YAML files under `config/locales/` are embedded at build time and
//!   flattened into dot-notation keys (`app.models.loading`)
//! - **Lookup**: [`resolve`] is a pure `(locale, key) -> text` function; a key that is
//!   missing from the table is returned unchanged
//! - **Preference**: [`LocaleSettings`] restores the language from `settings.conf` at
//!   startup and writes it back synchronously on every change
//!
//! # Usage
//!
//! ```rust
//! use guitarshop::i18n::{self, Locale};
//!
//! assert_eq!(i18n::resolve(Locale::En, "app.pagination.next"), "Next");
//! assert_eq!(i18n::resolve(Locale::Al, "no.such.key"), "no.such.key");
//! ```

mod loader;
mod locale;
mod preference;
pub mod translations;

pub use loader::{load_table, parse_locale_yaml};
pub use locale::Locale;
pub use preference::{LANGUAGE_KEY, LocaleSettings, LocaleStore};
pub use translations::{TranslationMap, resolve, translate};

/// What: Get a translation for a given key from `AppState`.
///
/// Inputs:
/// - `app`: `AppState` carrying the locale settings
/// - `key`: Dot-notation key (e.g., "app.brands.title")
///
/// Output:
/// - Translated string, or the key itself if translation not found
pub fn t(app: &crate::state::AppState, key: &str) -> String {
    resolve(app.locale.current(), key)
}

/// What: Resolve a key in `locale` and fill its `{}` placeholders.
///
/// Inputs:
/// - `locale`: Locale to resolve in
/// - `key`: Dot-notation key
/// - `args`: Format arguments (as Display trait objects)
///
/// Output:
/// - Formatted translated string
///
/// Details:
/// - Replaces placeholders in order: first {} gets first arg, etc.
/// - Surplus arguments are ignored; surplus placeholders stay literal.
pub fn fmt_in(locale: Locale, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = resolve(locale, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `app`: `AppState` carrying the locale settings
/// - `key`: Dot-notation key
/// - `args`: Format arguments
///
/// Output:
/// - Formatted translated string
pub fn t_fmt(app: &crate::state::AppState, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    fmt_in(app.locale.current(), key, args)
}

/// What: Get a translation with a single format argument (convenience function).
///
/// Inputs:
/// - `app`: `AppState` carrying the locale settings
/// - `key`: Dot-notation key
/// - `arg`: Single format argument
///
/// Output:
/// - Formatted translated string
pub fn t_fmt1<T: std::fmt::Display>(app: &crate::state::AppState, key: &str, arg: T) -> String {
    t_fmt(app, key, &[&arg])
}
