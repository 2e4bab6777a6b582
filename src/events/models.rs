//! Models screen keys: selection, paging, type filter and the search field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{Requester, request_for_route, request_models};
use crate::state::{AppState, Route};

/// What: Handle a key on the models screen (search field not focused).
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `requester`: Worker senders
///
/// Details:
/// - `/` focuses the search field; Tab cycles the type filter (resets to page 1).
/// - Left/Right change page; Up/Down move within the page; Enter opens details.
pub(super) fn handle_models_key(ke: KeyEvent, app: &mut AppState, requester: &Requester) {
    match ke.code {
        KeyCode::Char('/') => {
            app.search_focused = true;
        }
        KeyCode::Tab => {
            let next = app.models_params.type_filter.cycle();
            if app.models_params.set_type_filter(next) {
                app.models_selected = 0;
                app.clamp_views();
            }
        }
        _ => {
            let Some(view) = app.models_view() else {
                return;
            };
            match ke.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    app.models_selected = app.models_selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    app.models_selected =
                        (app.models_selected + 1).min(view.items.len().saturating_sub(1));
                }
                KeyCode::Right => {
                    if view.has_next() {
                        app.models_params.page_index = view.next_index();
                        app.models_selected = 0;
                    }
                }
                KeyCode::Left => {
                    if view.has_prev() {
                        app.models_params.page_index = view.prev_index();
                        app.models_selected = 0;
                    }
                }
                KeyCode::Enter => {
                    let Route::Models { brand_id } = &app.route else {
                        return;
                    };
                    if let Some(item) = view.items.get(app.models_selected) {
                        let route = Route::Details {
                            brand_id: brand_id.clone(),
                            model_id: item.id.clone(),
                        };
                        app.navigate(route);
                        request_for_route(app, requester);
                    }
                }
                _ => {}
            }
        }
    }
}

/// What: Edit the search text while the field is focused.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `requester`: Worker senders
///
/// Details:
/// - Every edit resets to page 1 and issues a request; the search worker debounces,
///   and clearing the text switches back to the full listing.
/// - Enter or Esc leaves the field; Ctrl-U clears it.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState, requester: &Requester) {
    let mut term = app.models_params.search_term.clone();
    match ke.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.search_focused = false;
            return;
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => term.clear(),
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => term.push(c),
        KeyCode::Backspace => {
            term.pop();
        }
        _ => return,
    }
    if app.models_params.set_search_term(term) {
        app.models_selected = 0;
        request_models(app, requester);
    }
}
