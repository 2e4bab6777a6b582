//! Issuing catalog requests and applying their responses to `AppState`.

use tokio::sync::mpsc;

use crate::state::{
    AppState, CatalogPayload, CatalogQuery, CatalogRequest, CatalogResponse, LoadState, Route,
};

/// Senders feeding the two catalog workers.
#[derive(Clone, Debug)]
pub struct Requester {
    /// Immediate worker (brands, listings, details).
    pub catalog_tx: mpsc::UnboundedSender<CatalogRequest>,
    /// Debounced worker (name search).
    pub search_tx: mpsc::UnboundedSender<CatalogRequest>,
}

impl Requester {
    /// What: Route a request to the worker that serves its query kind.
    ///
    /// Inputs:
    /// - `request`: Request to send
    ///
    /// Output: none; a closed channel is logged and otherwise ignored.
    pub fn send(&self, request: CatalogRequest) {
        let tx = if request.query.is_search() {
            &self.search_tx
        } else {
            &self.catalog_tx
        };
        if tx.send(request).is_err() {
            tracing::warn!("catalog worker channel closed; request dropped");
        }
    }
}

/// What: Request the brand list (cache first, then network).
///
/// Inputs:
/// - `app`: Application state; updates `brands` and `brands_request`
/// - `requester`: Worker senders
///
/// Output: none
pub fn request_brands(app: &mut AppState, requester: &Requester) {
    let query = CatalogQuery::Brands;
    app.brands = match app.cache.get(&query) {
        Some(CatalogPayload::Brands(list)) => LoadState::Loaded(list.clone()),
        _ => LoadState::Loading,
    };
    let id = app.next_request_id();
    app.brands_request = Some(id);
    requester.send(CatalogRequest { id, query });
}

/// What: Request the models of the current brand, listing or search depending on the term.
///
/// Inputs:
/// - `app`: Application state; updates `models` and `models_request`
/// - `requester`: Worker senders
///
/// Output: none; no-op outside the models screen.
///
/// Details:
/// - A cached result is shown at once. Without one, results already on screen stay
///   visible while a search is debounced; otherwise the screen shows loading.
pub fn request_models(app: &mut AppState, requester: &Requester) {
    let Route::Models { brand_id } = &app.route else {
        return;
    };
    let query = CatalogQuery::for_models(brand_id, &app.models_params.search_term);
    match app.cache.get(&query) {
        Some(CatalogPayload::Items(items)) => app.models = LoadState::Loaded(items.clone()),
        _ => {
            let keep_visible = query.is_search() && matches!(app.models, LoadState::Loaded(_));
            if !keep_visible {
                app.models = LoadState::Loading;
            }
        }
    }
    let id = app.next_request_id();
    app.models_request = Some(id);
    requester.send(CatalogRequest { id, query });
    app.clamp_views();
}

/// What: Request the open model's details.
///
/// Inputs:
/// - `app`: Application state; updates `details` and `details_request`
/// - `requester`: Worker senders
///
/// Output: none; no-op outside the details screen.
pub fn request_details(app: &mut AppState, requester: &Requester) {
    let Route::Details { brand_id, model_id } = &app.route else {
        return;
    };
    let query = CatalogQuery::Details {
        brand_id: brand_id.clone(),
        model_id: model_id.clone(),
    };
    app.details = match app.cache.get(&query) {
        Some(CatalogPayload::Details(Some(rec))) => LoadState::Loaded(rec.clone()),
        _ => LoadState::Loading,
    };
    let id = app.next_request_id();
    app.details_request = Some(id);
    requester.send(CatalogRequest { id, query });
}

/// What: Fetch whatever the current screen needs.
///
/// Inputs:
/// - `app`: Application state
/// - `requester`: Worker senders
///
/// Output: none
///
/// Details:
/// - Brands load once per session; only a failed load is fetched again.
/// - The models screen also loads brands when they are missing so its title can
///   show the brand name.
pub fn request_for_route(app: &mut AppState, requester: &Requester) {
    let brands_needed = matches!(app.brands, LoadState::Idle | LoadState::Failed(_));
    match app.route {
        Route::Brands => {
            if brands_needed {
                request_brands(app, requester);
            }
        }
        Route::Models { .. } => {
            if brands_needed {
                request_brands(app, requester);
            }
            request_models(app, requester);
        }
        Route::Details { .. } => request_details(app, requester),
    }
}

/// What: Cache a worker response and apply it when it is still the latest for its screen.
///
/// Inputs:
/// - `app`: Application state
/// - `response`: Worker response
///
/// Output:
/// - `true` when visible state changed.
///
/// Details:
/// - Successful payloads always enter the cache, even when stale.
/// - A response whose id is not the screen's pending id is otherwise ignored, so the
///   last request issued wins regardless of arrival order.
/// - A failed refresh of a query that has a cached payload keeps showing that payload.
/// - A details query answered with "no such model" is shown like a failed fetch.
pub fn apply_response(app: &mut AppState, response: CatalogResponse) -> bool {
    let CatalogResponse { id, query, outcome } = response;
    let outcome = match outcome {
        Ok(payload) => {
            app.cache.put(query.clone(), payload.clone());
            Ok(payload)
        }
        Err(e) => {
            tracing::warn!(request = id, ?query, error = %e, "catalog request failed");
            match app.cache.get(&query) {
                Some(cached) => Ok(cached.clone()),
                None => Err(e.to_string()),
            }
        }
    };

    let applied = match query {
        CatalogQuery::Brands => {
            if app.brands_request != Some(id) {
                return false;
            }
            app.brands_request = None;
            app.brands = match outcome {
                Ok(CatalogPayload::Brands(list)) => LoadState::Loaded(list),
                Ok(_) => LoadState::Failed("unexpected payload".to_string()),
                Err(e) => LoadState::Failed(e),
            };
            true
        }
        CatalogQuery::Models { .. } | CatalogQuery::Search { .. } => {
            if app.models_request != Some(id) {
                tracing::debug!(request = id, "stale models response ignored");
                return false;
            }
            app.models_request = None;
            app.models = match outcome {
                Ok(CatalogPayload::Items(items)) => LoadState::Loaded(items),
                Ok(_) => LoadState::Failed("unexpected payload".to_string()),
                Err(e) => LoadState::Failed(e),
            };
            true
        }
        CatalogQuery::Details { .. } => {
            if app.details_request != Some(id) {
                return false;
            }
            app.details_request = None;
            app.details = match outcome {
                Ok(CatalogPayload::Details(Some(rec))) => LoadState::Loaded(rec),
                Ok(CatalogPayload::Details(None)) => LoadState::Failed("model not found".to_string()),
                Ok(_) => LoadState::Failed("unexpected payload".to_string()),
                Err(e) => LoadState::Failed(e),
            };
            true
        }
    };
    app.clamp_views();
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::test_utils::{items, new_app, requester};

    #[test]
    /// What: Searches go to the debounced worker, listings to the immediate one
    ///
    /// - Input: Models screen with blank, then non-blank term
    /// - Output: One request on each channel with increasing ids
    fn request_models_routes_by_query_kind() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, mut search_rx) = requester();
        app.navigate(Route::Models {
            brand_id: "b1".into(),
        });
        request_models(&mut app, &req);
        assert!(app.models.is_loading());
        let first = catalog_rx.try_recv().expect("listing request");
        assert_eq!(
            first.query,
            CatalogQuery::Models {
                brand_id: "b1".into()
            }
        );

        app.models_params.set_search_term("strat".into());
        request_models(&mut app, &req);
        let second = search_rx.try_recv().expect("search request");
        assert!(second.id > first.id);
        assert_eq!(app.models_request, Some(second.id));
    }

    #[test]
    /// What: Only the latest request's response is applied
    ///
    /// - Input: Two requests; responses arrive newest first, then the stale one
    /// - Output: State reflects the newest; the stale one is cached but not shown
    fn stale_responses_are_ignored() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, mut search_rx) = requester();
        app.navigate(Route::Models {
            brand_id: "b1".into(),
        });
        request_models(&mut app, &req);
        let old = catalog_rx.try_recv().expect("listing");
        app.models_params.set_search_term("les".into());
        request_models(&mut app, &req);
        let new = search_rx.try_recv().expect("search");

        assert!(apply_response(
            &mut app,
            CatalogResponse {
                id: new.id,
                query: new.query.clone(),
                outcome: Ok(CatalogPayload::Items(items(2))),
            }
        ));
        assert!(!apply_response(
            &mut app,
            CatalogResponse {
                id: old.id,
                query: old.query.clone(),
                outcome: Ok(CatalogPayload::Items(items(9))),
            }
        ));
        assert_eq!(app.models.data().map(Vec::len), Some(2));
        assert_eq!(app.cache.len(), 2);
    }

    #[test]
    fn failure_without_cache_marks_screen_failed_and_retry_reloads() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, _s) = requester();
        request_brands(&mut app, &req);
        let r = catalog_rx.try_recv().expect("brands");
        apply_response(
            &mut app,
            CatalogResponse {
                id: r.id,
                query: r.query,
                outcome: Err(FetchError::Status(503)),
            },
        );
        assert!(matches!(app.brands, LoadState::Failed(ref m) if m.contains("503")));
        request_brands(&mut app, &req);
        assert!(app.brands.is_loading());
    }

    #[test]
    fn missing_model_is_shown_as_failure() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, _s) = requester();
        app.navigate(Route::Details {
            brand_id: "b1".into(),
            model_id: "nope".into(),
        });
        request_details(&mut app, &req);
        let r = catalog_rx.try_recv().expect("details");
        apply_response(
            &mut app,
            CatalogResponse {
                id: r.id,
                query: r.query,
                outcome: Ok(CatalogPayload::Details(None)),
            },
        );
        assert!(matches!(app.details, LoadState::Failed(_)));
    }

    #[test]
    /// What: Cached results display instantly while a refresh is in flight
    ///
    /// - Input: Cached brands, then a new request
    /// - Output: Loaded immediately; request still sent
    fn cache_and_network_shows_cached_brands() {
        let (_d, mut app) = new_app();
        let (req, mut catalog_rx, _s) = requester();
        app.cache.put(CatalogQuery::Brands, CatalogPayload::Brands(vec![]));
        request_brands(&mut app, &req);
        assert_eq!(app.brands, LoadState::Loaded(vec![]));
        assert!(catalog_rx.try_recv().is_ok());
    }
}
