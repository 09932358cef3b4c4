//! Shared test utilities for buscaya
//!
//! Provides scripted suggestion sources and small helpers used across
//! multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::SearchConfig;
    use crate::search_box::SuggestionBox;
    use crate::suggest::{
        CacheKey, RequestCoordinator, SuggestError, SuggestParams, SuggestRequest,
        SuggestResponse, Suggestion, SuggestionList, SuggestionSource,
    };

    /// Scripted answer for one query
    #[derive(Debug, Clone)]
    pub enum Reply {
        Labels(Vec<String>),
        Status(u16),
        Network,
    }

    /// A suggestion source that answers from a script, optionally after a delay
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedSource {
        replies: HashMap<String, (Duration, Reply)>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(mut self, query: &str, labels: &[&str]) -> Self {
            let labels = labels.iter().map(|l| l.to_string()).collect();
            self.replies
                .insert(query.to_string(), (Duration::ZERO, Reply::Labels(labels)));
            self
        }

        pub fn reply_after(mut self, query: &str, delay: Duration, reply: Reply) -> Self {
            self.replies.insert(query.to_string(), (delay, reply));
            self
        }

        /// Queries fetched so far, in order
        pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.calls)
        }
    }

    impl SuggestionSource for ScriptedSource {
        async fn fetch(&self, params: &SuggestParams) -> Result<SuggestionList, SuggestError> {
            self.calls.lock().unwrap().push(params.query.clone());

            let (delay, reply) = self
                .replies
                .get(&params.query)
                .cloned()
                .unwrap_or((Duration::ZERO, Reply::Labels(Vec::new())));

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match reply {
                Reply::Labels(labels) => Ok(labels.into_iter().map(Suggestion::new).collect()),
                Reply::Status(code) => Err(SuggestError::Status { code }),
                Reply::Network => Err(SuggestError::Network("connection refused".to_string())),
            }
        }
    }

    pub fn suggestions(labels: &[&str]) -> SuggestionList {
        labels.iter().map(|l| Suggestion::new(*l)).collect()
    }

    pub fn params(query: &str) -> SuggestParams {
        SuggestParams {
            scope: "negocios".to_string(),
            query: query.to_string(),
            limit: 8,
        }
    }

    /// Search config for the "negocios" scope with a short debounce
    pub fn test_search_config() -> SearchConfig {
        SearchConfig {
            debounce_ms: 10,
            ..SearchConfig::default()
        }
    }

    /// A box showing `labels` as the network answer for `query`.
    ///
    /// The worker side is dropped afterwards, so later lookups close the list.
    pub fn box_with_suggestions(query: &str, labels: &[&str]) -> SuggestionBox {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let config = SearchConfig {
            debounce_ms: 0,
            ..test_search_config()
        };
        let mut search_box = SuggestionBox::new(config, RequestCoordinator::new(request_tx, response_rx));

        search_box.input.set_text(query);
        search_box.on_query_changed();
        search_box.tick();

        let SuggestRequest::Fetch { request_id, .. } = request_rx.try_recv().unwrap();
        response_tx
            .send(SuggestResponse::Loaded {
                request_id,
                key: CacheKey::new("negocios", query),
                suggestions: suggestions(labels),
            })
            .unwrap();
        search_box.poll();
        search_box
    }

    /// App around an empty box with no worker behind it
    pub fn test_app(keep_open: bool) -> App {
        let search_box = SuggestionBox::new(test_search_config(), RequestCoordinator::disconnected());
        App::with_search_box(search_box, keep_open)
    }

    /// App whose box shows `labels` for `query`
    pub fn app_with_suggestions(query: &str, labels: &[&str], keep_open: bool) -> App {
        App::with_search_box(box_with_suggestions(query, labels), keep_open)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
