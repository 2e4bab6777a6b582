//! Derivation pipeline behavior on realistic catalog lists.

use guitarshop::logic::{
    MODELS_PER_PAGE, PLACEHOLDER_IMAGE_URL, ViewParameters, derive, page_count, paginate,
};
use guitarshop::state::{CatalogItem, ModelType, TypeFilter};

fn item(id: usize, kind: ModelType, image: Option<&str>) -> CatalogItem {
    CatalogItem {
        id: format!("m{id}"),
        name: format!("Model {id}"),
        kind,
        raw_kind: None,
        image: image.map(str::to_string),
        price: Some(999.0),
    }
}

fn electric(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| item(i, ModelType::Electric, Some("https://cdn.shop/p.png")))
        .collect()
}

fn params(filter: TypeFilter, page_index: usize) -> ViewParameters {
    ViewParameters {
        type_filter: filter,
        page_index,
        ..ViewParameters::default()
    }
}

#[test]
/// What: Fourteen valid items split into three pages of 6, 6 and 2
///
/// - Input: 14 electric items with real photos
/// - Output: 3 pages; the last holds items 13 and 14
fn fourteen_items_make_three_pages() {
    let raw = electric(14);
    let first = derive(&raw, &params(TypeFilter::All, 0));
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_items, 14);
    assert_eq!(first.items.len(), MODELS_PER_PAGE);
    let last = derive(&raw, &params(TypeFilter::All, 2));
    assert_eq!(last.items.len(), 2);
    assert_eq!((last.first_shown(), last.last_shown()), (13, 14));
    assert!(!last.has_next());
}

#[test]
/// What: Placeholder photos are filtered before counting
///
/// - Input: 10 items, 3 of them carrying the stock placeholder image
/// - Output: 7 items on a single page, none of the placeholders
fn ten_items_with_three_placeholders_leave_seven() {
    let raw: Vec<CatalogItem> = (0..10)
        .map(|i| {
            let image = if i % 3 == 0 && i > 0 {
                PLACEHOLDER_IMAGE_URL
            } else {
                "https://cdn.shop/p.png"
            };
            item(i, ModelType::Electric, Some(image))
        })
        .collect();
    let view = derive(&raw, &params(TypeFilter::All, 0));
    assert_eq!(view.total_items, 7);
    assert_eq!(view.total_pages, 2);
    assert!(
        view.items
            .iter()
            .all(|m| !["m3", "m6", "m9"].contains(&m.id.as_str()))
    );
}

#[test]
fn missing_blank_and_stock_host_images_are_dropped() {
    let mut raw = electric(2);
    raw.push(item(2, ModelType::Electric, None));
    raw.push(item(3, ModelType::Electric, Some("   ")));
    raw.push(item(
        4,
        ModelType::Electric,
        Some("https://images.pexels.com/photos/1/guitar.jpeg"),
    ));
    assert_eq!(derive(&raw, &params(TypeFilter::All, 0)).total_items, 2);
}

#[test]
/// What: Bass filter over a mixed list
///
/// - Input: 10 items, 2 declared bass
/// - Output: Exactly those 2 on one page
fn ten_items_with_two_bass_filter_to_two() {
    let raw: Vec<CatalogItem> = (0..10)
        .map(|i| {
            let kind = if i == 4 || i == 7 {
                ModelType::Bass
            } else {
                ModelType::Electric
            };
            item(i, kind, Some("https://cdn.shop/p.png"))
        })
        .collect();
    let view = derive(&raw, &params(TypeFilter::Only(ModelType::Bass), 0));
    assert_eq!(view.total_items, 2);
    assert_eq!(view.total_pages, 1);
    let ids: Vec<&str> = view.items.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m4", "m7"]);
}

#[test]
fn type_filter_ignores_name_inference() {
    // Name says bass but declared electric: the filter ignores the name.
    let raw = vec![CatalogItem {
        name: "Bass VI".into(),
        ..item(0, ModelType::Electric, Some("https://cdn.shop/b3.png"))
    }];
    let view = derive(&raw, &params(TypeFilter::Only(ModelType::Bass), 0));
    assert_eq!(view.total_items, 0);
}

#[test]
fn empty_list_has_one_empty_page() {
    let view = derive(&[], &params(TypeFilter::All, 4));
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page_index, 0);
    assert_eq!((view.first_shown(), view.last_shown()), (0, 0));
}

#[test]
fn derive_is_idempotent_and_order_preserving() {
    let raw = electric(9);
    let p = params(TypeFilter::All, 1);
    let a = derive(&raw, &p);
    let b = derive(&raw, &p);
    assert_eq!(a, b);
    let ids: Vec<&str> = a.items.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m6", "m7", "m8"]);
}

#[test]
fn narrowing_the_filter_never_grows_the_list() {
    let mut raw = electric(4);
    raw.push(item(4, ModelType::Acoustic, Some("https://cdn.shop/a.png")));
    let all = derive(&raw, &params(TypeFilter::All, 0)).total_items;
    for t in ModelType::FILTERABLE {
        let only = derive(&raw, &params(TypeFilter::Only(t), 0)).total_items;
        assert!(only <= all, "{t:?} produced {only} > {all}");
    }
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let raw = electric(14);
    let view = derive(&raw, &params(TypeFilter::All, 99));
    assert_eq!(view.page_index, 2);
    assert_eq!(view.items.len(), 2);
}

#[test]
fn page_lengths_sum_to_total() {
    for n in [0_usize, 1, 5, 6, 7, 12, 13, 31] {
        let list: Vec<usize> = (0..n).collect();
        let pages = page_count(n, 6);
        let sum: usize = (0..pages).map(|p| paginate(&list, p, 6).items.len()).sum();
        assert_eq!(sum, n, "n = {n}");
        assert!(pages >= 1);
    }
}
