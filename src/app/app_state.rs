use std::sync::mpsc::{self, Receiver};

use super::search_route::SearchRoute;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::search_box::SuggestionBox;
use crate::suggest::RequestCoordinator;

pub struct App {
    pub search_box: SuggestionBox,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    /// Keep running after a search is committed
    pub keep_open: bool,
    pub show_hint: bool,
    pub should_quit: bool,
    /// Searches committed by the box, in order
    pub routes: Vec<SearchRoute>,
    commit_rx: Receiver<String>,
    worker_lost: bool,
}

impl App {
    pub fn new(config: &Config, coordinator: RequestCoordinator, keep_open: bool) -> Self {
        let search_box = SuggestionBox::new(config.search.clone(), coordinator);
        Self::with_search_box(search_box, keep_open)
    }

    /// Wrap an existing box; its search callback is replaced by the app's
    pub fn with_search_box(mut search_box: SuggestionBox, keep_open: bool) -> Self {
        let (commit_tx, commit_rx) = mpsc::channel();
        let show_hint = search_box.config().show_hint;

        search_box.set_on_search(move |text| {
            // Receiver lives as long as the app
            let _ = commit_tx.send(text.to_string());
        });

        Self {
            search_box,
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            keep_open,
            show_hint,
            should_quit: false,
            routes: Vec::new(),
            commit_rx,
            worker_lost: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.search_box.query()
    }

    /// Text of the last committed search
    pub fn last_committed(&self) -> Option<&str> {
        self.routes.last().map(|r| r.query.as_str())
    }

    /// Report, once, that the suggestion worker is gone.
    ///
    /// Typing still works afterwards; the list just never opens again.
    pub fn check_suggestions_available(&mut self) {
        if self.worker_lost || self.search_box.coordinator().is_connected() {
            return;
        }
        self.worker_lost = true;
        log::error!("Suggestion worker unavailable");
        self.notification
            .show_error("Sugerencias no disponibles. Aún puedes buscar con Enter.");
    }

    /// Turn committed searches into routes.
    ///
    /// Without `keep_open` the first commit ends the session.
    pub fn drain_commits(&mut self) {
        while let Ok(text) = self.commit_rx.try_recv() {
            let route = SearchRoute::new(&self.search_box.config().scope, &text);
            log::debug!("Navigating to {}", route);

            self.notification
                .show_success(&format!("Buscando \"{}\" en {}", text, self.search_box.scope_name()));
            self.routes.push(route);

            if !self.keep_open {
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
