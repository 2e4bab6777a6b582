//! Event handling layer for the guitar shop TUI.
//!
//! `handle_event` routes a key press to the open modal, the search field,
//! global shortcuts, or the handler of the active screen, in that order.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};

use crate::logic::Requester;
use crate::state::{AppState, Modal, Route};

mod brands;
mod details;
mod global;
mod models;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState, requester: &Requester) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if app.modal.is_open() {
        match (&app.modal, ke.code) {
            (Modal::Help | Modal::Alert { .. }, KeyCode::Esc | KeyCode::Enter)
            | (Modal::Help, KeyCode::Char('?')) => app.modal = Modal::None,
            _ => {}
        }
        return false;
    }

    if app.search_focused && matches!(app.route, Route::Models { .. }) {
        models::handle_search_key(*ke, app, requester);
        return false;
    }

    if let Some(exit) = global::handle_global_key(*ke, app, requester) {
        return exit;
    }

    match app.route {
        Route::Brands => brands::handle_brands_key(*ke, app, requester),
        Route::Models { .. } => models::handle_models_key(*ke, app, requester),
        Route::Details { .. } => details::handle_details_key(*ke, app),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    use crate::test_utils::{new_app, requester};

    pub(super) fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    /// What: Modals swallow keys until closed
    ///
    /// - Input: Help open, then 'q', then Esc
    /// - Output: No exit while open; Esc closes
    fn modal_captures_keys() {
        let (_d, mut app) = new_app();
        let (req, _c, _s) = requester();
        app.modal = Modal::Help;
        assert!(!handle_event(&key(KeyCode::Char('q')), &mut app, &req));
        assert_eq!(app.modal, Modal::Help);
        handle_event(&key(KeyCode::Esc), &mut app, &req);
        assert_eq!(app.modal, Modal::None);
        assert!(handle_event(&key(KeyCode::Char('q')), &mut app, &req));
    }

    #[test]
    fn ctrl_c_quits() {
        let (_d, mut app) = new_app();
        let (req, _c, _s) = requester();
        let ev = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&ev, &mut app, &req));
    }

    #[test]
    fn non_key_events_are_ignored() {
        let (_d, mut app) = new_app();
        let (req, _c, _s) = requester();
        assert!(!handle_event(&CEvent::Resize(80, 24), &mut app, &req));
    }
}
