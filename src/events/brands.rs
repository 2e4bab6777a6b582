use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{BRANDS_PER_PAGE, Requester, request_for_route};
use crate::state::{AppState, Route};

/// What: Handle a key on the brands screen.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `requester`: Worker senders
///
/// Details:
/// - Up/Down move through all brands; the visible page follows the selection.
/// - Left/Right jump a whole page, landing on that page's first brand.
/// - Enter opens the highlighted brand's models.
pub(super) fn handle_brands_key(ke: KeyEvent, app: &mut AppState, requester: &Requester) {
    let Some(count) = app.brands.data().map(Vec::len) else {
        return;
    };
    if count == 0 {
        return;
    }
    let page = app.brands_selected / BRANDS_PER_PAGE;
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.brands_selected = app.brands_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.brands_selected = (app.brands_selected + 1).min(count - 1);
        }
        KeyCode::Right => {
            let next = (page + 1) * BRANDS_PER_PAGE;
            if next < count {
                app.brands_selected = next;
            }
        }
        KeyCode::Left => {
            app.brands_selected = page.saturating_sub(1) * BRANDS_PER_PAGE;
        }
        KeyCode::Enter => {
            if let Some(brand) = app.selected_brand() {
                let route = Route::Models {
                    brand_id: brand.id.clone(),
                };
                app.navigate(route);
                request_for_route(app, requester);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_event;
    use super::super::tests::key;
    use super::*;
    use crate::state::{Brand, LoadState};
    use crate::test_utils::{new_app, requester};

    fn brands(n: usize) -> Vec<Brand> {
        (0..n)
            .map(|i| Brand {
                id: format!("b{i}"),
                name: format!("Brand {i}"),
                image: None,
            })
            .collect()
    }

    #[test]
    /// What: Paging and selection stay within the brand list
    ///
    /// - Input: 10 brands; Right, Right, Down, Left
    /// - Output: Selection 8, 8, 9, 0
    fn paging_moves_selection_by_page() {
        let (_d, mut app) = new_app();
        let (req, _c, _s) = requester();
        app.brands = LoadState::Loaded(brands(10));
        handle_event(&key(KeyCode::Right), &mut app, &req);
        assert_eq!(app.brands_selected, 8);
        handle_event(&key(KeyCode::Right), &mut app, &req);
        assert_eq!(app.brands_selected, 8);
        handle_event(&key(KeyCode::Down), &mut app, &req);
        handle_event(&key(KeyCode::Down), &mut app, &req);
        assert_eq!(app.brands_selected, 9);
        handle_event(&key(KeyCode::Left), &mut app, &req);
        assert_eq!(app.brands_selected, 0);
    }

    #[test]
    fn enter_opens_models_and_requests_them() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, _s) = requester();
        app.brands = LoadState::Loaded(brands(3));
        app.brands_selected = 2;
        handle_event(&key(KeyCode::Enter), &mut app, &req);
        assert_eq!(
            app.route,
            Route::Models {
                brand_id: "b2".into()
            }
        );
        let r = catalog_rx.try_recv().expect("models request");
        assert_eq!(app.models_request, Some(r.id));
    }
}
