//! Validity and type filters applied before pagination.

use crate::state::{CatalogItem, TypeFilter};

/// Stock-photo hosts the backend uses as "no real image" placeholders.
pub const PLACEHOLDER_IMAGE_HOSTS: &[&str] = &["pexels.com"];

/// Default guitar placeholder served for models without a photo.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/164936/pexels-photo-164936.jpeg?auto=compress&cs=tinysrgb&w=400";

/// What: Decide whether an image reference is a genuine product photo.
///
/// Inputs:
/// - `image`: Image URL from the backend, if any
///
/// Output:
/// - `true` when present, not blank, and not a placeholder sentinel.
#[must_use]
pub fn is_real_image(image: Option<&str>) -> bool {
    let Some(url) = image else {
        return false;
    };
    let url = url.trim();
    if url.is_empty() || url == PLACEHOLDER_IMAGE_URL {
        return false;
    }
    !PLACEHOLDER_IMAGE_HOSTS.iter().any(|host| url.contains(host))
}

/// What: Keep only items with a genuine product photo.
///
/// Inputs:
/// - `items`: Raw items in backend order
///
/// Output:
/// - Borrowed items passing [`is_real_image`], order preserved.
#[must_use]
pub fn validity_filter(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    items
        .iter()
        .filter(|it| is_real_image(it.image.as_deref()))
        .collect()
}

/// What: Apply the type filter.
///
/// Inputs:
/// - `items`: Items that passed the validity filter
/// - `filter`: Current filter value
///
/// Output:
/// - Items whose declared type matches, order preserved.
///
/// Details:
/// - Only the declared type is consulted. The name-based label inference in
///   `labels` never widens a match.
#[must_use]
pub fn type_filter<'a>(items: Vec<&'a CatalogItem>, filter: TypeFilter) -> Vec<&'a CatalogItem> {
    match filter {
        TypeFilter::All => items,
        TypeFilter::Only(kind) => items.into_iter().filter(|it| it.kind == kind).collect(),
    }
}
