//! Suggestion pipeline
//!
//! Everything between a debounced query and a list of suggestions: the
//! per-box cache, the HTTP source, the background worker and the request
//! coordinator that keeps only the latest query's answer.

pub mod cache;
pub mod client;
pub mod coordinator;
pub mod debouncer;
pub mod parser;
pub mod source;
pub mod types;
pub mod worker;

pub use cache::SuggestionCache;
pub use client::HttpSuggestClient;
pub use coordinator::{RequestCoordinator, SuggestOutcome};
pub use debouncer::Debouncer;
pub use source::{SuggestError, SuggestionSource};
pub use types::{
    CacheKey, SuggestParams, SuggestRequest, SuggestResponse, Suggestion, SuggestionList,
};
