//! Background workers executing catalog requests.

mod catalog;
mod search;

pub use catalog::{run_query, spawn_catalog_worker};
pub use search::{SEARCH_DEBOUNCE_MS, spawn_search_worker};
