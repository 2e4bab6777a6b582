//! Catalog request/response messages exchanged with the background workers.

use crate::sources::FetchError;
use crate::state::types::{Brand, CatalogItem, DetailRecord};

/// One cacheable catalog query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CatalogQuery {
    /// All brands.
    Brands,
    /// Name-sorted model listing of a brand.
    Models {
        /// Brand identifier.
        brand_id: String,
    },
    /// Server-side name search within a brand.
    Search {
        /// Brand identifier.
        brand_id: String,
        /// Trimmed, non-empty search text.
        term: String,
    },
    /// One model's details.
    Details {
        /// Brand identifier.
        brand_id: String,
        /// Model identifier.
        model_id: String,
    },
}

impl CatalogQuery {
    /// What: Pick the models-screen query for a brand and search text.
    ///
    /// Inputs:
    /// - `brand_id`: Brand being browsed
    /// - `search_term`: Raw search text
    ///
    /// Output:
    /// - [`CatalogQuery::Search`] for non-blank text, otherwise [`CatalogQuery::Models`].
    #[must_use]
    pub fn for_models(brand_id: &str, search_term: &str) -> Self {
        let term = search_term.trim();
        if term.is_empty() {
            Self::Models {
                brand_id: brand_id.to_string(),
            }
        } else {
            Self::Search {
                brand_id: brand_id.to_string(),
                term: term.to_string(),
            }
        }
    }

    /// Whether the search worker (debounced) should serve this query.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }
}

/// Successful payload of a [`CatalogQuery`].
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogPayload {
    /// Brand list.
    Brands(Vec<Brand>),
    /// Listing or search results.
    Items(Vec<CatalogItem>),
    /// Model details; `None` when the server does not know the model.
    Details(Option<DetailRecord>),
}

/// Request sent from the UI thread to a worker.
#[derive(Clone, Debug)]
pub struct CatalogRequest {
    /// Monotonic request id; responses echo it back.
    pub id: u64,
    /// What to fetch.
    pub query: CatalogQuery,
}

/// Worker response for one [`CatalogRequest`].
#[derive(Debug)]
pub struct CatalogResponse {
    /// Id of the originating request.
    pub id: u64,
    /// Query that was executed.
    pub query: CatalogQuery,
    /// Payload or failure.
    pub outcome: Result<CatalogPayload, FetchError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_models_selects_search_only_for_non_blank_text() {
        assert_eq!(
            CatalogQuery::for_models("b1", "   "),
            CatalogQuery::Models {
                brand_id: "b1".into()
            }
        );
        let q = CatalogQuery::for_models("b1", "  strat ");
        assert_eq!(
            q,
            CatalogQuery::Search {
                brand_id: "b1".into(),
                term: "strat".into()
            }
        );
        assert!(q.is_search());
    }
}
