//! HTTP suggestion client
//!
//! Issues `GET {suggest_url}?scope=..&q=..&limit=..` with reqwest and parses
//! the JSON body. The cookie store stands in for the browser's
//! `credentials: include`.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};

use super::parser::parse_suggestions;
use super::source::{SuggestError, SuggestionSource};
use super::types::{SuggestParams, SuggestionList};

#[derive(Debug, Clone)]
pub struct HttpSuggestClient {
    client: Client,
    endpoint: Url,
}

impl HttpSuggestClient {
    /// Create a client for the given absolute endpoint.
    ///
    /// `timeout` is only applied when set; otherwise reqwest's defaults hold.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, SuggestError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for a query
    pub fn request_url(&self, params: &SuggestParams) -> Url {
        build_request_url(&self.endpoint, params)
    }
}

/// Resolve a possibly relative suggest URL against the API base.
pub fn resolve_endpoint(api_base: &str, suggest_url: &str) -> Result<Url, SuggestError> {
    if let Ok(url) = Url::parse(suggest_url) {
        return Ok(url);
    }

    let base = Url::parse(api_base).map_err(|e| SuggestError::InvalidUrl(e.to_string()))?;
    base.join(suggest_url)
        .map_err(|e| SuggestError::InvalidUrl(e.to_string()))
}

fn build_request_url(endpoint: &Url, params: &SuggestParams) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("scope", &params.scope)
        .append_pair("q", &params.query)
        .append_pair("limit", &params.limit.to_string());
    url
}

impl SuggestionSource for HttpSuggestClient {
    async fn fetch(&self, params: &SuggestParams) -> Result<SuggestionList, SuggestError> {
        let url = self.request_url(params);

        #[cfg(debug_assertions)]
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SuggestError::Status {
                code: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SuggestError::Parse(e.to_string()))?;

        Ok(parse_suggestions(&body))
    }
}
