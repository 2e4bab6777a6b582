use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, DetailsTab};

/// What: Handle a key on the details screen.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Details:
/// - Tab switches between specifications and musicians.
/// - Left/Right page through musicians while that tab is active.
pub(super) fn handle_details_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.details_tab = match app.details_tab {
                DetailsTab::Specs => DetailsTab::Musicians,
                DetailsTab::Musicians => DetailsTab::Specs,
            };
        }
        KeyCode::Right | KeyCode::Left if app.details_tab == DetailsTab::Musicians => {
            if let Some(view) = app.musicians_view() {
                app.musicians_page = if ke.code == KeyCode::Right {
                    view.next_index()
                } else {
                    view.prev_index()
                };
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
    use crate::state::{DetailRecord, LoadState, Musician, Route};
    use crate::test_utils::{items, new_app, requester};

    #[test]
    /// What: Musician paging works only on the musicians tab and stays in range
    ///
    /// - Input: 3 musicians; Right on specs tab, Tab, Right x2
    /// - Output: Page 0, then 1, then 1
    fn musicians_paging_follows_tab() {
        let (_d, mut app) = new_app();
        let (req, _c, _s) = requester();
        app.navigate(Route::Details {
            brand_id: "b1".into(),
            model_id: "m0".into(),
        });
        app.details = LoadState::Loaded(DetailRecord {
            item: items(1).remove(0),
            description: None,
            specs: None,
            musicians: (0..3)
                .map(|i| Musician {
                    name: format!("Player {i}"),
                    image: None,
                    bands: vec![],
                })
                .collect(),
        });
        handle_event(&key(KeyCode::Right), &mut app, &req);
        assert_eq!(app.musicians_page, 0);
        handle_event(&key(KeyCode::Tab), &mut app, &req);
        assert_eq!(app.details_tab, DetailsTab::Musicians);
        handle_event(&key(KeyCode::Right), &mut app, &req);
        assert_eq!(app.musicians_page, 1);
        handle_event(&key(KeyCode::Right), &mut app, &req);
        assert_eq!(app.musicians_page, 1);
    }
}
