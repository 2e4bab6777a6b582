//! Navigation and view helpers on `AppState`.

use crate::logic::{
    BRANDS_PER_PAGE, DerivedView, MUSICIANS_PER_PAGE, Page, ViewParameters, derive, paginate,
};
use crate::state::app_state::AppState;
use crate::state::modal::Modal;
use crate::state::types::{Brand, DetailsTab, LoadState, Musician, Route};

impl AppState {
    /// Hand out the next request id.
    pub const fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// What: Look up a brand's display name.
    ///
    /// Inputs:
    /// - `brand_id`: Brand identifier
    ///
    /// Output:
    /// - Name from the loaded brand list, or `None` when unknown.
    #[must_use]
    pub fn brand_name(&self, brand_id: &str) -> Option<&str> {
        self.brands
            .data()?
            .iter()
            .find(|b| b.id == brand_id)
            .map(|b| b.name.as_str())
    }

    /// Brand currently highlighted, if the list is loaded and non-empty.
    #[must_use]
    pub fn selected_brand(&self) -> Option<&Brand> {
        self.brands.data()?.get(self.brands_selected)
    }

    /// Page of brands containing the highlighted brand.
    #[must_use]
    pub fn brands_page(&self) -> Option<Page<Brand>> {
        let brands = self.brands.data()?;
        Some(paginate(
            brands,
            self.brands_selected / BRANDS_PER_PAGE,
            BRANDS_PER_PAGE,
        ))
    }

    /// Derived models page for the current parameters.
    #[must_use]
    pub fn models_view(&self) -> Option<DerivedView> {
        self.models
            .data()
            .map(|raw| derive(raw, &self.models_params))
    }

    /// Current page of the open model's musicians.
    #[must_use]
    pub fn musicians_view(&self) -> Option<Page<Musician>> {
        self.details
            .data()
            .map(|d| paginate(&d.musicians, self.musicians_page, MUSICIANS_PER_PAGE))
    }

    /// What: Pull page indices and selections back into range after data or parameters change.
    ///
    /// Inputs: none
    ///
    /// Output: none; mutates page and selection fields.
    ///
    /// Details:
    /// - Page indices take the clamped value the pipeline rendered, so a later
    ///   "next" starts from a page that exists.
    pub fn clamp_views(&mut self) {
        if let Some(view) = self.models_view() {
            self.models_params.page_index = view.page_index;
            self.models_selected = self
                .models_selected
                .min(view.items.len().saturating_sub(1));
        }
        if let Some(view) = self.musicians_view() {
            self.musicians_page = view.page_index;
        }
        if let Some(brands) = self.brands.data() {
            self.brands_selected = self.brands_selected.min(brands.len().saturating_sub(1));
        }
    }

    /// What: Switch to `route`, resetting the per-screen state it owns.
    ///
    /// Inputs:
    /// - `route`: Destination
    ///
    /// Output: none
    ///
    /// Details:
    /// - Entering the models screen of the same brand again keeps search, filter and
    ///   page; another brand starts from a clean slate.
    /// - Entering details always starts on the specifications tab, first musicians page.
    pub fn navigate(&mut self, route: Route) {
        match &route {
            Route::Brands => {
                self.search_focused = false;
            }
            Route::Models { brand_id } => {
                if self.models_brand.as_deref() != Some(brand_id.as_str()) {
                    self.models_brand = Some(brand_id.clone());
                    self.models = LoadState::Idle;
                    self.models_params = ViewParameters::default();
                    self.models_selected = 0;
                    self.models_request = None;
                }
                self.search_focused = false;
            }
            Route::Details { .. } => {
                self.details = LoadState::Idle;
                self.details_tab = DetailsTab::Specs;
                self.musicians_page = 0;
                self.details_request = None;
                self.search_focused = false;
            }
        }
        tracing::debug!(?route, "navigate");
        self.route = route;
        self.modal = Modal::None;
    }

    /// What: Route one level up the hierarchy.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Parent route, or `None` on the brands screen.
    #[must_use]
    pub fn parent_route(&self) -> Option<Route> {
        match &self.route {
            Route::Brands => None,
            Route::Models { .. } => Some(Route::Brands),
            Route::Details { brand_id, .. } => Some(Route::Models {
                brand_id: brand_id.clone(),
            }),
        }
    }
}
