//! Core value types used by the catalog state.

/// Guitar manufacturer grouping catalog items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brand {
    /// Opaque identifier, unique across brands.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Logo URL when the backend has one.
    pub image: Option<String>,
}

/// Declared instrument type of a catalog item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelType {
    /// Solid or hollow body electric guitar.
    Electric,
    /// Steel-string acoustic guitar.
    Acoustic,
    /// Bass guitar.
    Bass,
    /// Nylon-string classical guitar.
    Classical,
    /// Type missing or not one the shop knows.
    #[default]
    Unspecified,
}

impl ModelType {
    /// Types offered by the type filter, in menu order.
    pub const FILTERABLE: [Self; 4] = [Self::Electric, Self::Acoustic, Self::Bass, Self::Classical];

    /// What: Normalize a wire type string.
    ///
    /// Inputs:
    /// - `raw`: Type as sent by the backend, if any
    ///
    /// Output:
    /// - Matching variant (case-insensitive, trimmed); `Unspecified` for absent or unknown values.
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("electric") => Self::Electric,
            Some("acoustic") => Self::Acoustic,
            Some("bass") => Self::Bass,
            Some("classical") => Self::Classical,
            _ => Self::Unspecified,
        }
    }

    /// Lowercase name, as used in filter values and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Acoustic => "acoustic",
            Self::Bass => "bass",
            Self::Classical => "classical",
            Self::Unspecified => "unspecified",
        }
    }

    /// Translation key of the human-readable label, `None` for `Unspecified`.
    #[must_use]
    pub const fn label_key(self) -> Option<&'static str> {
        match self {
            Self::Electric => Some("app.models.types.electric"),
            Self::Acoustic => Some("app.models.types.acoustic"),
            Self::Bass => Some("app.models.types.bass"),
            Self::Classical => Some("app.models.types.classical"),
            Self::Unspecified => None,
        }
    }
}

/// One sellable instrument as listed under a brand.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    /// Identifier, unique within its brand and stable for the session.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared type.
    pub kind: ModelType,
    /// Type text as the backend sent it; shown when `kind` is `Unspecified`.
    pub raw_kind: Option<String>,
    /// Product photo URL, if any.
    pub image: Option<String>,
    /// Price in dollars when known.
    pub price: Option<f64>,
}

/// Hardware and tonewood specification of a model. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Specs {
    /// Body tonewood.
    pub body_wood: Option<String>,
    /// Neck tonewood.
    pub neck_wood: Option<String>,
    /// Fingerboard tonewood.
    pub fingerboard_wood: Option<String>,
    /// Pickup configuration.
    pub pickups: Option<String>,
    /// Tuning machines.
    pub tuners: Option<String>,
    /// Scale length, as text (units vary by backend record).
    pub scale_length: Option<String>,
    /// Bridge type.
    pub bridge: Option<String>,
}

impl Specs {
    /// What: List the present fields as `(label key, value)` pairs in display order.
    ///
    /// Inputs: none
    ///
    /// Output: Pairs for every field with a non-blank value.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("app.details.specs.body_wood", &self.body_wood),
            ("app.details.specs.neck_wood", &self.neck_wood),
            ("app.details.specs.fingerboard_wood", &self.fingerboard_wood),
            ("app.details.specs.pickups", &self.pickups),
            ("app.details.specs.tuners", &self.tuners),
            ("app.details.specs.bridge", &self.bridge),
            ("app.details.specs.scale_length", &self.scale_length),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

/// Musician associated with a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Musician {
    /// Display name.
    pub name: String,
    /// Portrait URL, if any.
    pub image: Option<String>,
    /// Bands, in backend order.
    pub bands: Vec<String>,
}

/// Full record behind the details screen.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRecord {
    /// Listing fields of the model.
    pub item: CatalogItem,
    /// Marketing description.
    pub description: Option<String>,
    /// Specification block when the backend provides one.
    pub specs: Option<Specs>,
    /// Associated musicians, in backend order.
    pub musicians: Vec<Musician>,
}

/// Value of the type filter on the models screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    /// Every type passes.
    #[default]
    All,
    /// Only items whose declared type equals this one pass.
    Only(ModelType),
}

impl TypeFilter {
    /// What: Parse a filter value such as `all` or `Bass`.
    ///
    /// Inputs:
    /// - `s`: Filter text (case-insensitive)
    ///
    /// Output:
    /// - `Some(TypeFilter)` for `all` or a filterable type; `None` otherwise.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_ascii_lowercase();
        if norm == "all" {
            return Some(Self::All);
        }
        ModelType::FILTERABLE
            .into_iter()
            .find(|t| t.as_str() == norm)
            .map(Self::Only)
    }

    /// What: Advance to the next filter value in menu order (all, electric, ..., classical, all).
    ///
    /// Inputs: none
    ///
    /// Output: Next filter.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::All => Self::Only(ModelType::FILTERABLE[0]),
            Self::Only(t) => ModelType::FILTERABLE
                .iter()
                .position(|x| *x == t)
                .and_then(|i| ModelType::FILTERABLE.get(i + 1))
                .map_or(Self::All, |next| Self::Only(*next)),
        }
    }

    /// Translation key of the filter's menu label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "app.models.types.all",
            Self::Only(t) => t.label_key().unwrap_or("app.models.types.all"),
        }
    }
}

/// Addressable views of the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Brand list (root).
    Brands,
    /// Models of one brand.
    Models {
        /// Brand whose models are listed.
        brand_id: String,
    },
    /// One model's details.
    Details {
        /// Owning brand.
        brand_id: String,
        /// Model shown.
        model_id: String,
    },
}

/// Tabs of the details screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailsTab {
    /// Specification rows.
    #[default]
    Specs,
    /// Paged musician list.
    Musicians,
}

/// Fetch lifecycle of one screen's primary data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight and nothing to show.
    Loading,
    /// Data available (possibly from cache while a refresh is in flight).
    Loaded(T),
    /// Last request failed; carries the error text for the log line under the message.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the screen should show its loading indicator.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
