use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::{CatalogGateway, FetchError, SortSpec};
use crate::state::{CatalogPayload, CatalogQuery, CatalogRequest, CatalogResponse};

/// What: Execute one catalog query against the gateway.
///
/// Inputs:
/// - `gateway`: Catalog backend
/// - `query`: Query to run
///
/// Output:
/// - Payload matching the query kind, or the gateway error.
///
/// # Errors
/// - Propagates the [`FetchError`] returned by the gateway.
pub async fn run_query<G: CatalogGateway>(
    gateway: &G,
    query: &CatalogQuery,
) -> Result<CatalogPayload, FetchError> {
    match query {
        CatalogQuery::Brands => gateway.list_brands().await.map(CatalogPayload::Brands),
        CatalogQuery::Models { brand_id } => gateway
            .list_models(brand_id, &SortSpec::name_asc())
            .await
            .map(CatalogPayload::Items),
        CatalogQuery::Search { brand_id, term } => gateway
            .search_models(brand_id, term)
            .await
            .map(CatalogPayload::Items),
        CatalogQuery::Details { brand_id, model_id } => gateway
            .get_model_details(brand_id, model_id)
            .await
            .map(CatalogPayload::Details),
    }
}

/// What: Run `request` on its own task and deliver the response.
///
/// Inputs:
/// - `gateway`: Shared catalog backend
/// - `request`: Request to execute
/// - `response_tx`: Channel back to the main loop
pub(super) fn dispatch<G: CatalogGateway + 'static>(
    gateway: &Arc<G>,
    request: CatalogRequest,
    response_tx: &mpsc::UnboundedSender<CatalogResponse>,
) {
    let gateway = Arc::clone(gateway);
    let tx = response_tx.clone();
    tokio::spawn(async move {
        let CatalogRequest { id, query } = request;
        tracing::debug!(request = id, ?query, "catalog request started");
        let outcome = run_query(gateway.as_ref(), &query).await;
        let _ = tx.send(CatalogResponse { id, query, outcome });
    });
}

/// What: Spawn the worker serving brand, listing, and details requests.
///
/// Inputs:
/// - `gateway`: Shared catalog backend
/// - `request_rx`: Incoming requests
/// - `response_tx`: Responses back to the main loop
///
/// Details:
/// - Each request runs concurrently; ordering is settled by request ids on the
///   receiving side.
pub fn spawn_catalog_worker<G: CatalogGateway + 'static>(
    gateway: Arc<G>,
    mut request_rx: mpsc::UnboundedReceiver<CatalogRequest>,
    response_tx: mpsc::UnboundedSender<CatalogResponse>,
) {
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            dispatch(&gateway, request, &response_tx);
        }
    });
}
