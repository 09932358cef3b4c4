//! Suggestion data types and worker channel messages

use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::normalize::normalize;

/// A single entry of the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown in the list and copied into the input on pick
    pub label: String,
    /// Distinct value committed instead of the label, when the backend sends one
    pub value: Option<String>,
}

impl Suggestion {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The text handed to the search callback when this suggestion is picked
    pub fn commit_text(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }
}

/// Ordered suggestions for one query
pub type SuggestionList = Vec<Suggestion>;

/// Cache key: `scope:normalized-query`
///
/// Built once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    scope: String,
    query: String,
}

impl CacheKey {
    pub fn new(scope: &str, query: &str) -> Self {
        Self {
            scope: scope.to_string(),
            query: normalize(query),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The normalized query part of the key
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty_query(&self) -> bool {
        self.query.is_empty()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.query)
    }
}

/// Parameters of one suggestion fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestParams {
    pub scope: String,
    /// Trimmed query as typed (not normalized)
    pub query: String,
    pub limit: usize,
}

impl SuggestParams {
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.scope, &self.query)
    }
}

/// Request messages sent to the suggestion worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    Fetch {
        params: SuggestParams,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the suggestion worker thread
#[derive(Debug)]
pub enum SuggestResponse {
    Loaded {
        request_id: u64,
        key: CacheKey,
        suggestions: SuggestionList,
    },
    /// Fetch failed; carries the reason for the debug log only
    Failed { request_id: u64, message: String },
    Cancelled { request_id: u64 },
    /// The worker crashed; every pending request is lost
    WorkerPanicked(String),
}

impl SuggestResponse {
    pub fn request_id(&self) -> Option<u64> {
        match self {
            SuggestResponse::Loaded { request_id, .. }
            | SuggestResponse::Failed { request_id, .. }
            | SuggestResponse::Cancelled { request_id } => Some(*request_id),
            SuggestResponse::WorkerPanicked(_) => None,
        }
    }
}
