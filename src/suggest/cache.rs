//! Per-box suggestion cache
//!
//! Lives exactly as long as the search box that owns it. Not shared between
//! boxes and never persisted. There is no eviction: the key space is bounded
//! by what one person types in a session.

use std::collections::HashMap;

use super::types::{CacheKey, SuggestionList};

#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<CacheKey, SuggestionList>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&SuggestionList> {
        self.entries.get(key)
    }

    /// Store the suggestions for a query.
    ///
    /// Keys with an empty normalized query are rejected; returns whether the
    /// entry was stored.
    pub fn set(&mut self, key: CacheKey, suggestions: SuggestionList) -> bool {
        if key.is_empty_query() {
            log::debug!("Refusing to cache suggestions for empty query");
            return false;
        }
        self.entries.insert(key, suggestions);
        true
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
