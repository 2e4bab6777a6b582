use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use super::catalog::dispatch;
use crate::sources::CatalogGateway;
use crate::state::{CatalogRequest, CatalogResponse};

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE_MS: u64 = 250;

/// What: Spawn the debounced worker for model name searches.
///
/// Inputs:
/// - `gateway`: Shared catalog backend
/// - `request_rx`: Search requests, one per edit of the search text
/// - `response_tx`: Responses back to the main loop
///
/// Details:
/// - Waits until no newer request arrived for [`SEARCH_DEBOUNCE_MS`], then sends only
///   the latest one. Superseded requests never reach the network and get no response.
pub fn spawn_search_worker<G: CatalogGateway + 'static>(
    gateway: Arc<G>,
    mut request_rx: mpsc::UnboundedReceiver<CatalogRequest>,
    response_tx: mpsc::UnboundedSender<CatalogResponse>,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = request_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(newer) = request_rx.recv() => { latest = newer; }
                    () = sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)) => { break; }
                }
            }
            dispatch(&gateway, latest, &response_tx);
        }
    });
}
