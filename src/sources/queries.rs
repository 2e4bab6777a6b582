//! GraphQL documents sent to the catalog service.

use serde::Serialize;

/// All brands.
pub const BRANDS_QUERY: &str = "query GetBrands {
  findAllBrands {
    id
    name
    image
  }
}";

/// Models of one brand with a server-side sort.
pub const MODELS_QUERY: &str = "query GetModels($id: ID!, $sortBy: sortBy!) {
  findBrandModels(id: $id, sortBy: $sortBy) {
    id
    name
    type
    image
    price
  }
}";

/// Brand-scoped name search; matching semantics belong to the server.
pub const SEARCH_QUERY: &str = "query SearchModels($brandId: String!, $name: String!) {
  searchModels(brandId: $brandId, name: $name) {
    id
    name
    type
    image
    price
  }
}";

/// One model with specs and musicians.
pub const DETAILS_QUERY: &str = "query GetModelDetails($brandId: ID!, $modelId: ID!) {
  findUniqueModel(brandId: $brandId, modelId: $modelId) {
    id
    name
    type
    image
    description
    price
    specs {
      bodyWood
      neckWood
      fingerboardWood
      pickups
      tuners
      scaleLength
      bridge
    }
    musicians {
      name
      musicianImage
      bands
    }
  }
}";

/// Sort direction understood by `findBrandModels`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    /// Ascending.
    #[serde(rename = "ASC")]
    Asc,
    /// Descending.
    #[serde(rename = "DESC")]
    Desc,
}

/// `sortBy` argument of the models query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    /// Field to sort on (e.g. `name`).
    pub field: String,
    /// Direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Alphabetical by name, the order every screen requests.
    #[must_use]
    pub fn name_asc() -> Self {
        Self {
            field: "name".to_string(),
            order: SortOrder::Asc,
        }
    }
}
