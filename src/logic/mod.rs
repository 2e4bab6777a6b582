//! Core non-UI logic: the list derivation pipeline and display helpers.
//!
//! The pipeline is synchronous and side-effect free. Screens call [`derive()`]
//! (models) or [`paginate()`] (musicians, brands) on every render. [`query`]
//! issues catalog requests and applies their responses.

pub mod derive;
pub mod filter;
pub mod labels;
pub mod paginate;
pub mod query;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use derive::{
    BRANDS_PER_PAGE, DerivedView, MODELS_PER_PAGE, MUSICIANS_PER_PAGE, ViewParameters, derive,
};
pub use filter::{
    PLACEHOLDER_IMAGE_HOSTS, PLACEHOLDER_IMAGE_URL, is_real_image, type_filter, validity_filter,
};
pub use labels::{display_type_key, display_type_label};
pub use paginate::{Page, page_count, paginate};
pub use query::{
    Requester, apply_response, request_brands, request_details, request_for_route, request_models,
};
