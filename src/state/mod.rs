//! Application state: domain types, query messages, modal, and the `AppState` container.

pub mod app_state;
pub mod modal;
pub mod query;
pub mod types;

pub use app_state::{AppState, QUERY_CACHE_CAPACITY, QueryCache};
pub use modal::Modal;
pub use query::{CatalogPayload, CatalogQuery, CatalogRequest, CatalogResponse};
pub use types::{
    Brand, CatalogItem, DetailRecord, DetailsTab, LoadState, ModelType, Musician, Route, Specs,
    TypeFilter,
};
