//! Search routes
//!
//! A committed search is where the marketplace would navigate next:
//! `/buscar?scope=<scope>&q=<text>`, form-encoded.

use std::fmt;

use reqwest::Url;

pub const SEARCH_PATH: &str = "/buscar";

/// Origin used only to borrow `Url`'s query encoder
const ROUTE_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoute {
    pub scope: String,
    pub query: String,
}

impl SearchRoute {
    pub fn new(scope: &str, query: &str) -> Self {
        Self {
            scope: scope.to_string(),
            query: query.to_string(),
        }
    }

    /// Path plus encoded query string
    pub fn path(&self) -> String {
        let mut url = match Url::parse(ROUTE_ORIGIN) {
            Ok(url) => url,
            Err(_) => return SEARCH_PATH.to_string(),
        };
        url.set_path(SEARCH_PATH);
        url.query_pairs_mut()
            .append_pair("scope", &self.scope)
            .append_pair("q", &self.query);

        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}

impl fmt::Display for SearchRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
