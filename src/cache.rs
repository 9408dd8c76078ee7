//! Compiled layout caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::layout::Layout;

/// Global cache for compiled layouts.
static CACHE: Mutex<Option<LruCache<String, Arc<Layout>>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("layout cache size must be non-zero"),
};

/// Get or compile a layout, using the cache.
pub fn get_or_parse(layout: &str) -> Arc<Layout> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(compiled) = cache.get(layout) {
        debug!("layout cache hit for {:?}", layout);
        return Arc::clone(compiled);
    }

    let compiled = Arc::new(Layout::parse(layout));
    cache.put(layout.to_string(), Arc::clone(&compiled));
    compiled
}
