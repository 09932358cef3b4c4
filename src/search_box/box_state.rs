//! Search box state machine
//!
//! Wires keystrokes to the debouncer, the per-box cache and the request
//! coordinator, and owns the list the dropdown shows.
//!
//! ```text
//! Idle ──type (miss)──▶ Debouncing ──quiet period──▶ Loading ──ok──▶ ResolvedNetwork
//!   │                        │                          │
//!   └──type (hit)──▶ ResolvedCached ◀──filled meanwhile─┘   failure ──▶ Closed
//! ```
//! Escape, a pick, a click outside or an empty input close the list.

use std::fmt;

use super::input_state::InputState;
use crate::config::SearchConfig;
use crate::suggest::{
    CacheKey, Debouncer, RequestCoordinator, SuggestOutcome, SuggestParams, Suggestion,
    SuggestionCache, SuggestionList,
};

/// Callback invoked with the committed search text
pub type OnSearch = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxPhase {
    /// Empty query, nothing shown
    Idle,
    /// Waiting out the quiet period before fetching
    Debouncing,
    /// Fetch in flight
    Loading,
    ResolvedCached,
    ResolvedNetwork,
    /// List hidden after a pick, Escape, click-away or failure
    Closed,
}

pub struct SuggestionBox {
    pub input: InputState,
    config: SearchConfig,
    scope_name: String,
    phase: BoxPhase,
    suggestions: SuggestionList,
    highlighted: Option<usize>,
    cache: SuggestionCache,
    coordinator: RequestCoordinator,
    debouncer: Debouncer,
    /// Query waiting for the debouncer or for its fetch
    pending: Option<SuggestParams>,
    on_search: Option<OnSearch>,
}

impl fmt::Debug for SuggestionBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionBox")
            .field("query", &self.query())
            .field("phase", &self.phase)
            .field("suggestions", &self.suggestions.len())
            .field("highlighted", &self.highlighted)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl SuggestionBox {
    /// Create a box. A non-empty `default_value` starts its lookup right away.
    pub fn new(config: SearchConfig, coordinator: RequestCoordinator) -> Self {
        let scope_name = config.display_scope_name();
        let input = InputState::new(&config.placeholder_text(), &scope_name, config.variant);
        let debouncer = Debouncer::new(config.debounce_ms);
        let default_value = config.default_value.clone();

        let mut search_box = Self {
            input,
            config,
            scope_name,
            phase: BoxPhase::Idle,
            suggestions: Vec::new(),
            highlighted: None,
            cache: SuggestionCache::new(),
            coordinator,
            debouncer,
            pending: None,
            on_search: None,
        };

        if !default_value.is_empty() {
            search_box.input.set_text(&default_value);
            search_box.on_query_changed();
        }

        search_box
    }

    /// Set the callback that receives committed searches
    pub fn set_on_search(&mut self, on_search: impl FnMut(&str) + 'static) {
        self.on_search = Some(Box::new(on_search));
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn phase(&self) -> BoxPhase {
        self.phase
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scope_name(&self) -> &str {
        &self.scope_name
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn coordinator(&self) -> &RequestCoordinator {
        &self.coordinator
    }

    /// Suggestions as rendered: the stored list capped at `max_items`
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        let len = self.suggestions.len().min(self.config.max_items);
        &self.suggestions[..len]
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the dropdown is showing
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, BoxPhase::Idle | BoxPhase::Closed)
            && !self.visible_suggestions().is_empty()
    }

    /// Whether a newer answer is on its way
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, BoxPhase::Debouncing | BoxPhase::Loading)
    }

    /// React to a change of the input text.
    ///
    /// Must be called after every edit; it is what keeps the list, the cache
    /// lookup and the debounce timer in step with the text.
    pub fn on_query_changed(&mut self) {
        let query = self.query().trim().to_string();

        if query.is_empty() {
            self.reset_lookup();
            self.suggestions.clear();
            self.highlighted = None;
            self.phase = BoxPhase::Idle;
            return;
        }

        let params = SuggestParams {
            scope: self.config.scope.clone(),
            query,
            limit: self.config.max_items,
        };

        // A punctuation-only query is still fetched, it just never hits the cache
        let key = params.cache_key();
        if let Some(hit) = self.cached(&key) {
            self.reset_lookup();
            self.show(hit, BoxPhase::ResolvedCached);
            return;
        }

        // Whatever is in flight answers an older query now
        self.coordinator.cancel();
        self.pending = Some(params);
        self.debouncer.schedule();
        self.phase = BoxPhase::Debouncing;
    }

    /// Fire the pending fetch once the quiet period has elapsed.
    ///
    /// Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        if self.phase != BoxPhase::Debouncing || !self.debouncer.is_ready() {
            return false;
        }
        self.debouncer.mark_complete();

        let Some(params) = self.pending.clone() else {
            return false;
        };

        if let Some(hit) = self.cached(&params.cache_key()) {
            self.pending = None;
            self.show(hit, BoxPhase::ResolvedCached);
            return true;
        }

        match self.coordinator.request(params) {
            Some(_) => self.phase = BoxPhase::Loading,
            None => {
                // No worker: behave like a failed fetch
                self.pending = None;
                self.close();
            }
        }
        true
    }

    /// Apply the outcome of the active request, if one arrived.
    ///
    /// Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        match self.coordinator.poll() {
            Some(SuggestOutcome::Loaded { key, suggestions }) => {
                self.cache.set(key.clone(), suggestions.clone());

                let current = self.pending.as_ref().map(|p| p.cache_key());
                if current.as_ref() != Some(&key) {
                    return false;
                }
                self.pending = None;
                self.show(suggestions, BoxPhase::ResolvedNetwork);
                true
            }
            Some(SuggestOutcome::Unavailable) => {
                self.pending = None;
                self.close();
                true
            }
            None => false,
        }
    }

    /// One event-loop step: debounce, then results
    pub fn update(&mut self) -> bool {
        let ticked = self.tick();
        let polled = self.poll();
        ticked || polled
    }

    /// Move the highlight down, wrapping to the top
    pub fn highlight_next(&mut self) {
        let len = self.visible_suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn highlight_previous(&mut self) {
        let len = self.visible_suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn set_highlight(&mut self, index: usize) {
        if index < self.visible_suggestions().len() {
            self.highlighted = Some(index);
        }
    }

    /// Enter: pick the highlighted suggestion, or submit the typed text
    pub fn confirm(&mut self) {
        match self.highlighted {
            Some(index) if self.is_open() => self.pick(index),
            _ => self.submit(),
        }
    }

    /// Pick a visible suggestion: copy its label into the input and commit it
    pub fn pick(&mut self, index: usize) {
        let Some(suggestion) = self.visible_suggestions().get(index).cloned() else {
            return;
        };

        // Setting the label must not start another lookup
        self.input.set_text(&suggestion.label);
        self.reset_lookup();
        self.close();
        self.commit(suggestion.commit_text());
    }

    /// Commit the typed text as a free-form search. Empty text is ignored.
    pub fn submit(&mut self) {
        let query = self.query().trim().to_string();
        if query.is_empty() {
            return;
        }
        self.reset_lookup();
        self.close();
        self.commit(&query);
    }

    /// Empty the input; same as deleting every character
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.on_query_changed();
    }

    /// Hide the list. Escape, a click outside and failures all land here.
    pub fn close(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
        if self.phase != BoxPhase::Idle {
            self.phase = BoxPhase::Closed;
        }
    }

    /// Hide the list and drop any lookup in progress
    pub fn dismiss(&mut self) {
        self.reset_lookup();
        self.close();
    }

    fn cached(&self, key: &CacheKey) -> Option<SuggestionList> {
        if key.is_empty_query() {
            return None;
        }
        self.cache.get(key).cloned()
    }

    fn show(&mut self, suggestions: SuggestionList, phase: BoxPhase) {
        self.suggestions = suggestions;
        self.highlighted = None;
        self.phase = phase;
    }

    fn reset_lookup(&mut self) {
        self.coordinator.cancel();
        self.debouncer.cancel();
        self.pending = None;
    }

    fn commit(&mut self, text: &str) {
        log::debug!("Search committed: {:?}", text);
        if let Some(on_search) = self.on_search.as_mut() {
            on_search(text);
        }
    }
}

#[cfg(test)]
#[path = "box_state_tests.rs"]
mod box_state_tests;
