//! Persisted locale preference and its in-memory lifecycle.

use std::io;
use std::path::{Path, PathBuf};

use crate::i18n::Locale;

/// Settings key holding the selected language.
pub const LANGUAGE_KEY: &str = "language";

/// Single-key preference store backed by `settings.conf`.
#[derive(Clone, Debug)]
pub struct LocaleStore {
    /// Settings file holding the `language = <code>` line.
    path: PathBuf,
}

impl LocaleStore {
    /// Create a store writing to `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Settings file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read the persisted locale.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `Some(Locale)` when the file holds a supported code; `None` when the file or key
    ///   is missing, unreadable, or the value is not a supported locale.
    #[must_use]
    pub fn load(&self) -> Option<Locale> {
        let raw = crate::theme::read_setting(&self.path, LANGUAGE_KEY)?;
        let parsed = Locale::parse(&raw);
        if parsed.is_none() {
            tracing::warn!(
                path = %self.path.display(),
                value = %raw,
                "unsupported language in settings; using baseline"
            );
        }
        parsed
    }

    /// What: Persist `locale`, preserving all other settings lines.
    ///
    /// Inputs:
    /// - `locale`: Locale to store
    ///
    /// Output:
    /// - `Ok(())` once the file is written.
    ///
    /// # Errors
    /// - Returns `Err` when the settings directory or file cannot be written.
    pub fn save(&self, locale: Locale) -> io::Result<()> {
        crate::theme::save_setting(&self.path, LANGUAGE_KEY, locale.code())
    }
}

/// Process-wide language configuration: the current locale plus where it persists.
///
/// Rendering code receives this object explicitly (through `AppState`), so the
/// resolver itself never consults ambient state.
#[derive(Clone, Debug)]
pub struct LocaleSettings {
    /// Locale currently used for rendering.
    current: Locale,
    /// Backing preference store.
    store: LocaleStore,
}

impl LocaleSettings {
    /// What: Initialize from the persisted preference.
    ///
    /// Inputs:
    /// - `store`: Preference store to read now and write on every change
    ///
    /// Output:
    /// - Settings holding the stored locale, or [`Locale::BASELINE`] when absent or invalid.
    #[must_use]
    pub fn init(store: LocaleStore) -> Self {
        let current = store.load().unwrap_or(Locale::BASELINE);
        tracing::info!(locale = %current, path = %store.path().display(), "locale initialized");
        Self { current, store }
    }

    /// Locale currently in effect.
    #[must_use]
    pub const fn current(&self) -> Locale {
        self.current
    }

    /// What: Switch the locale and persist the choice before returning.
    ///
    /// Inputs:
    /// - `locale`: New locale
    ///
    /// Output:
    /// - `Ok(())` when the preference was written.
    ///
    /// # Errors
    /// - Returns the write error; the in-memory locale is switched regardless so
    ///   the UI follows the user's choice for this session.
    pub fn set_locale(&mut self, locale: Locale) -> io::Result<()> {
        self.current = locale;
        let res = self.store.save(locale);
        match &res {
            Ok(()) => tracing::info!(locale = %locale, "locale changed"),
            Err(e) => tracing::warn!(locale = %locale, error = %e, "failed to persist locale"),
        }
        res
    }

    /// What: Resolve `key` in the current locale.
    ///
    /// Inputs:
    /// - `key`: Translation key
    ///
    /// Output:
    /// - Display text or the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        crate::i18n::resolve(self.current, key)
    }
}
