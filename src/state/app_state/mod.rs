//! Central `AppState` container shared by the event, worker, and UI layers.

use crate::i18n::LocaleSettings;
use crate::logic::ViewParameters;
use crate::state::modal::Modal;
use crate::state::types::{Brand, CatalogItem, DetailRecord, DetailsTab, LoadState, Route};

mod cache;
mod methods;

pub use cache::{QUERY_CACHE_CAPACITY, QueryCache};

/// Global application state.
///
/// Mutated by key handlers and by worker responses on the main loop; read by the
/// renderer every frame. Only the locale is persisted across runs.
#[derive(Debug)]
pub struct AppState {
    /// Screen currently shown.
    pub route: Route,
    /// Active locale and its persistence.
    pub locale: LocaleSettings,
    /// Overlay above the screen.
    pub modal: Modal,

    /// Brand list lifecycle.
    pub brands: LoadState<Vec<Brand>>,
    /// Absolute index of the highlighted brand; the page follows from it.
    pub brands_selected: usize,
    /// Id of the brand request whose response may still be applied.
    pub brands_request: Option<u64>,

    /// Brand whose models are held in `models`; a different brand resets the screen.
    pub models_brand: Option<String>,
    /// Raw listing or search results, in server order.
    pub models: LoadState<Vec<CatalogItem>>,
    /// Search text, type filter and page of the models screen.
    pub models_params: ViewParameters,
    /// Highlighted row within the visible page.
    pub models_selected: usize,
    /// Whether keystrokes currently edit the search text.
    pub search_focused: bool,
    /// Id of the models request whose response may still be applied.
    pub models_request: Option<u64>,

    /// Details lifecycle of the open model.
    pub details: LoadState<DetailRecord>,
    /// Active details tab.
    pub details_tab: DetailsTab,
    /// Zero-based musicians page.
    pub musicians_page: usize,
    /// Id of the details request whose response may still be applied.
    pub details_request: Option<u64>,

    /// Recently fetched query results, shown instantly while a refresh runs.
    pub cache: QueryCache,
    /// Source of request ids.
    next_request_id: u64,
}

impl AppState {
    /// What: Build the initial state on the brands screen.
    ///
    /// Inputs:
    /// - `locale`: Initialized locale settings
    ///
    /// Output:
    /// - Fresh state with nothing loaded.
    #[must_use]
    pub fn new(locale: LocaleSettings) -> Self {
        Self {
            route: Route::Brands,
            locale,
            modal: Modal::None,
            brands: LoadState::Idle,
            brands_selected: 0,
            brands_request: None,
            models_brand: None,
            models: LoadState::Idle,
            models_params: ViewParameters::default(),
            models_selected: 0,
            search_focused: false,
            models_request: None,
            details: LoadState::Idle,
            details_tab: DetailsTab::default(),
            musicians_page: 0,
            details_request: None,
            cache: QueryCache::default(),
            next_request_id: 1,
        }
    }
}
