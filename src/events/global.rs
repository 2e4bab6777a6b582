//! Shortcuts available on every screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::i18n::t_fmt1;
use crate::logic::{Requester, request_for_route};
use crate::state::{AppState, LoadState, Modal, Route};

/// What: Switch to the next locale and persist it.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Details:
/// - The UI switches immediately; when the preference cannot be written an alert
///   (already in the new language) reports it.
pub(super) fn toggle_language(app: &mut AppState) {
    let next = app.locale.current().next();
    if let Err(e) = app.locale.set_locale(next) {
        app.modal = Modal::Alert {
            message: t_fmt1(app, "app.alert.language_save_failed", e),
        };
    }
}

/// Whether the active screen's primary data failed to load.
fn current_screen_failed(app: &AppState) -> bool {
    match app.route {
        Route::Brands => matches!(app.brands, LoadState::Failed(_)),
        Route::Models { .. } => matches!(app.models, LoadState::Failed(_)),
        Route::Details { .. } => matches!(app.details, LoadState::Failed(_)),
    }
}

/// What: Handle keys that behave the same on every screen.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `requester`: Worker senders
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when consumed, `None` to fall through.
pub(super) fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    requester: &Requester,
) -> Option<bool> {
    match ke.code {
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => Some(true),
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('?') => {
            app.modal = Modal::Help;
            Some(false)
        }
        KeyCode::Char('L' | 'l') => {
            toggle_language(app);
            Some(false)
        }
        KeyCode::Char('r') => {
            if current_screen_failed(app) {
                tracing::info!(route = ?app.route, "retry requested");
                request_for_route(app, requester);
            }
            Some(false)
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if let Some(parent) = app.parent_route() {
                app.navigate(parent);
                request_for_route(app, requester);
            }
            Some(false)
        }
        _ => None,
    }
}
