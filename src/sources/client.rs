//! HTTP client for the catalog GraphQL endpoint.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::queries::{BRANDS_QUERY, DETAILS_QUERY, MODELS_QUERY, SEARCH_QUERY, SortSpec};
use super::wire::{BrandsData, DetailsData, Envelope, ModelsData, SearchData};
use super::{FetchError, Result};
use crate::state::{Brand, CatalogItem, DetailRecord};

/// What: Read-only operations the app needs from the catalog backend.
///
/// Details:
/// - Implemented by [`CatalogClient`] for the real service; tests substitute
///   in-memory fakes.
/// - Futures are `Send` so the background worker can drive them on the runtime.
pub trait CatalogGateway: Send + Sync {
    /// All brands in server order.
    fn list_brands(&self) -> impl Future<Output = Result<Vec<Brand>>> + Send;

    /// Models of `brand_id`, sorted server-side per `sort`.
    fn list_models(
        &self,
        brand_id: &str,
        sort: &SortSpec,
    ) -> impl Future<Output = Result<Vec<CatalogItem>>> + Send;

    /// Models of `brand_id` whose name matches `name` (server-defined matching).
    fn search_models(
        &self,
        brand_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<Vec<CatalogItem>>> + Send;

    /// One model's details; `Ok(None)` when the server knows no such model.
    fn get_model_details(
        &self,
        brand_id: &str,
        model_id: &str,
    ) -> impl Future<Output = Result<Option<DetailRecord>>> + Send;
}

/// GraphQL client bound to one endpoint.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// GraphQL endpoint URL.
    endpoint: String,
}

impl CatalogClient {
    /// What: Build a client for `endpoint`.
    ///
    /// Inputs:
    /// - `endpoint`: GraphQL URL
    /// - `timeout`: Whole-request timeout; the connect timeout is capped at the same value
    ///
    /// Output:
    /// - Client, or [`FetchError::Transport`] when the TLS backend cannot initialize.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest` fails to build the client.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("guitarshop/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// What: POST one GraphQL document and decode its `data` payload.
    ///
    /// Inputs:
    /// - `query`: GraphQL document
    /// - `variables`: JSON object of variables
    ///
    /// Output:
    /// - Decoded payload.
    ///
    /// Details:
    /// - Non-2xx responses carrying a GraphQL `errors` array report those messages;
    ///   otherwise the status code.
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let body = json!({ "query": query, "variables": variables });
        let started = std::time::Instant::now();
        let resp = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "catalog response"
        );
        decode_envelope(status.as_u16(), &text)
    }
}

/// What: Interpret a GraphQL HTTP response body.
///
/// Inputs:
/// - `status`: HTTP status code
/// - `text`: Response body
///
/// Output:
/// - Payload, or the matching [`FetchError`] variant.
pub(crate) fn decode_envelope<T: DeserializeOwned>(status: u16, text: &str) -> Result<T> {
    let parsed: std::result::Result<Envelope<T>, _> = serde_json::from_str(text);
    let ok_status = (200..300).contains(&status);
    match parsed {
        Ok(env) if !env.errors.is_empty() => {
            let messages: Vec<String> = env.errors.into_iter().map(|e| e.message).collect();
            Err(FetchError::Graphql(messages.join("; ")))
        }
        Ok(_) if !ok_status => Err(FetchError::Status(status)),
        Ok(env) => env
            .data
            .ok_or_else(|| FetchError::Decode("response has no data".to_string())),
        Err(_) if !ok_status => Err(FetchError::Status(status)),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

impl CatalogGateway for CatalogClient {
    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let data: BrandsData = self.execute(BRANDS_QUERY, json!({})).await?;
        Ok(data
            .find_all_brands
            .unwrap_or_default()
            .into_iter()
            .map(Brand::from)
            .collect())
    }

    async fn list_models(&self, brand_id: &str, sort: &SortSpec) -> Result<Vec<CatalogItem>> {
        let data: ModelsData = self
            .execute(MODELS_QUERY, json!({ "id": brand_id, "sortBy": sort }))
            .await?;
        Ok(data
            .find_brand_models
            .unwrap_or_default()
            .into_iter()
            .map(CatalogItem::from)
            .collect())
    }

    async fn search_models(&self, brand_id: &str, name: &str) -> Result<Vec<CatalogItem>> {
        let data: SearchData = self
            .execute(SEARCH_QUERY, json!({ "brandId": brand_id, "name": name }))
            .await?;
        Ok(data
            .search_models
            .unwrap_or_default()
            .into_iter()
            .map(CatalogItem::from)
            .collect())
    }

    async fn get_model_details(
        &self,
        brand_id: &str,
        model_id: &str,
    ) -> Result<Option<DetailRecord>> {
        let data: DetailsData = self
            .execute(
                DETAILS_QUERY,
                json!({ "brandId": brand_id, "modelId": model_id }),
            )
            .await?;
        Ok(data.find_unique_model.map(DetailRecord::from))
    }
}
