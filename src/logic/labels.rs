//! Display-only labels derived from catalog items.

use crate::i18n::{Locale, fmt_in, resolve};
use crate::state::{CatalogItem, ModelType};

/// What: Choose the type label key shown under a model's name.
///
/// Inputs:
/// - `item`: Catalog item
///
/// Output:
/// - Translation key of the label.
///
/// Details:
/// - Declared type first; otherwise the name is searched for "bass", "acoustic"
///   and "classical" (in that order); otherwise the electric label.
/// - Label text only. Filtering never consults this inference.
#[must_use]
pub fn display_type_key(item: &CatalogItem) -> &'static str {
    if let Some(key) = item.kind.label_key() {
        return key;
    }
    let name = item.name.to_lowercase();
    let inferred = if name.contains("bass") {
        ModelType::Bass
    } else if name.contains("acoustic") {
        ModelType::Acoustic
    } else if name.contains("classical") {
        ModelType::Classical
    } else {
        ModelType::Electric
    };
    inferred.label_key().unwrap_or("app.models.types.electric")
}

/// What: Type label text shown next to a model.
///
/// Inputs:
/// - `locale`: Display language
/// - `item`: Catalog item
///
/// Output:
/// - "<raw type> Guitar" when the backend sent a type the shop does not know;
///   otherwise the text of [`display_type_key`].
#[must_use]
pub fn display_type_label(locale: Locale, item: &CatalogItem) -> String {
    if item.kind == ModelType::Unspecified
        && let Some(raw) = item.raw_kind.as_deref()
    {
        return fmt_in(locale, "app.models.types.other", &[&raw]);
    }
    resolve(locale, display_type_key(item))
}
