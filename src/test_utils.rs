//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use tokio::sync::mpsc;

use crate::i18n::{LocaleSettings, LocaleStore};
use crate::logic::Requester;
use crate::state::{AppState, CatalogItem, CatalogRequest, ModelType};

/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output:
/// - Temporary directory holding the settings file (keep it alive for the test)
/// - Fresh `AppState` whose locale persists into that directory
pub fn new_app() -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocaleStore::new(dir.path().join("settings.conf"));
    (dir, AppState::new(LocaleSettings::init(store)))
}

/// What: Build a requester whose receiving ends the test can inspect.
///
/// Inputs: None
///
/// Output:
/// - Requester plus the catalog and search receivers.
pub fn requester() -> (
    Requester,
    mpsc::UnboundedReceiver<CatalogRequest>,
    mpsc::UnboundedReceiver<CatalogRequest>,
) {
    let (catalog_tx, catalog_rx) = mpsc::unbounded_channel();
    let (search_tx, search_rx) = mpsc::unbounded_channel();
    (
        Requester {
            catalog_tx,
            search_tx,
        },
        catalog_rx,
        search_rx,
    )
}

/// `n` electric models with genuine photos, ids `m0..`.
pub fn items(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| CatalogItem {
            id: format!("m{i}"),
            name: format!("Model {i}"),
            kind: ModelType::Electric,
            raw_kind: None,
            image: Some(format!("https://cdn.shop/{i}.png")),
            price: Some(1000.0 + i as f64),
        })
        .collect()
}
