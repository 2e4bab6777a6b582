use std::path::Path;

use crate::i18n::{LocaleSettings, LocaleStore};
use crate::state::AppState;

/// What: Build the initial application state from the settings file.
///
/// Inputs:
/// - `settings_path`: Path of `settings.conf`
///
/// Output:
/// - `AppState` on the brands screen with the persisted (or baseline) locale.
///
/// Details:
/// - Writes a commented skeleton when the file does not exist yet; a failure to
///   do so is logged and otherwise ignored.
pub fn initialize_app_state(settings_path: &Path) -> AppState {
    match crate::theme::ensure_settings_file(settings_path) {
        Ok(true) => tracing::info!(path = %settings_path.display(), "created settings file"),
        Ok(false) => {}
        Err(e) => tracing::warn!(
            path = %settings_path.display(),
            error = %e,
            "could not create settings file"
        ),
    }
    let store = LocaleStore::new(settings_path.to_path_buf());
    AppState::new(LocaleSettings::init(store))
}
