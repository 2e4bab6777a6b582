//! In-memory cache of catalog query results.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::state::query::{CatalogPayload, CatalogQuery};

/// Maximum number of distinct queries kept.
pub const QUERY_CACHE_CAPACITY: usize = 64;

/// What: Provide the non-zero capacity used by the query cache.
///
/// Inputs: None.
///
/// Output:
/// - Non-zero capacity.
const fn capacity() -> NonZeroUsize {
    match NonZeroUsize::new(QUERY_CACHE_CAPACITY) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}

/// LRU map from query to its last successful payload.
#[derive(Debug)]
pub struct QueryCache {
    /// Backing LRU.
    inner: LruCache<CatalogQuery, CatalogPayload>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self {
            inner: LruCache::new(capacity()),
        }
    }
}

impl QueryCache {
    /// Cached payload for `query`, marking it most recently used.
    pub fn get(&mut self, query: &CatalogQuery) -> Option<&CatalogPayload> {
        self.inner.get(query)
    }

    /// Store the payload of a successful request.
    pub fn put(&mut self, query: CatalogQuery, payload: CatalogPayload) {
        self.inner.put(query, payload);
    }

    /// Number of cached queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
