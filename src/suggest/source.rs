//! Suggestion source abstraction
//!
//! A source answers one query with a list of suggestions. The HTTP client is
//! the production source; tests plug in scripted ones.

use thiserror::Error;

use super::types::{SuggestParams, SuggestionList};

/// Errors that can occur while fetching suggestions
///
/// None of these reach the user: the search box treats every variant as
/// "no suggestions".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SuggestError {
    /// Transport failure (DNS, connect, reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP error ({code})")]
    Status { code: u16 },

    /// The body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The suggest URL could not be built
    #[error("Invalid suggest URL: {0}")]
    InvalidUrl(String),

    /// The request was superseded by a newer query
    #[error("Request cancelled")]
    Cancelled,
}

/// Something that can answer a suggestion query
#[allow(async_fn_in_trait)]
pub trait SuggestionSource {
    async fn fetch(&self, params: &SuggestParams) -> Result<SuggestionList, SuggestError>;
}
