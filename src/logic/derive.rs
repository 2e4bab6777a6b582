//! The list derivation pipeline: validity filter, type filter, pagination.

use crate::logic::filter::{type_filter, validity_filter};
use crate::logic::paginate::{Page, paginate};
use crate::state::{CatalogItem, TypeFilter};

/// Models shown per page on the models screen.
pub const MODELS_PER_PAGE: usize = 6;
/// Musicians shown per page on the details screen.
pub const MUSICIANS_PER_PAGE: usize = 2;
/// Brands shown per page on the brands screen.
pub const BRANDS_PER_PAGE: usize = 8;

/// Per-screen view state feeding [`derive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewParameters {
    /// Search text as typed; a non-blank value selects the search query.
    pub search_term: String,
    /// Current type filter.
    pub type_filter: TypeFilter,
    /// Requested zero-based page.
    pub page_index: usize,
    /// Items per page.
    pub page_size: usize,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            type_filter: TypeFilter::All,
            page_index: 0,
            page_size: MODELS_PER_PAGE,
        }
    }
}

impl ViewParameters {
    /// Whether the search query (rather than the listing query) is active.
    #[must_use]
    pub fn is_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// What: Replace the search term, resetting the page when it changes.
    ///
    /// Inputs:
    /// - `term`: New search text
    ///
    /// Output:
    /// - `true` when the term actually changed.
    pub fn set_search_term(&mut self, term: String) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.page_index = 0;
        true
    }

    /// What: Replace the type filter, resetting the page when it changes.
    ///
    /// Inputs:
    /// - `filter`: New filter value
    ///
    /// Output:
    /// - `true` when the filter actually changed.
    pub fn set_type_filter(&mut self, filter: TypeFilter) -> bool {
        if self.type_filter == filter {
            return false;
        }
        self.type_filter = filter;
        self.page_index = 0;
        true
    }
}

/// Visible slice of catalog items plus pagination metadata.
pub type DerivedView = Page<CatalogItem>;

/// What: Turn a raw result set into the rendered page.
///
/// Inputs:
/// - `raw_items`: Items in the order the gateway returned them (listing or search)
/// - `params`: Current view parameters
///
/// Output:
/// - [`DerivedView`] with at most `page_size` items; `page_index` clamped into range.
///
/// Details:
/// - Steps: drop items without a genuine photo, apply the declared-type filter,
///   then slice the requested page.
/// - Never re-sorts and never fails: an empty input yields one empty page.
#[must_use]
pub fn derive(raw_items: &[CatalogItem], params: &ViewParameters) -> DerivedView {
    let valid = validity_filter(raw_items);
    let filtered: Vec<CatalogItem> = type_filter(valid, params.type_filter)
        .into_iter()
        .cloned()
        .collect();
    paginate(&filtered, params.page_index, params.page_size)
}
