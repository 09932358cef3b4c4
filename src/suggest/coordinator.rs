//! Request coordination
//!
//! Owns the channel pair to the suggestion worker and the single active
//! request of one search box. Issuing a request cancels the previous one, and
//! only the active request's outcome is ever handed back to the box: a reply
//! for a superseded query is dropped even if it arrives late.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::types::{CacheKey, SuggestParams, SuggestRequest, SuggestResponse, SuggestionList};

/// Outcome of the active request, as seen by the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    Loaded {
        key: CacheKey,
        suggestions: SuggestionList,
    },
    /// Network failure, bad status, bad body or a dead worker
    Unavailable,
}

#[derive(Debug)]
struct ActiveRequest {
    request_id: u64,
    cancel_token: CancellationToken,
}

#[derive(Debug, Default)]
pub struct RequestCoordinator {
    request_tx: Option<Sender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
    /// Last allocated request id
    request_id: u64,
    active: Option<ActiveRequest>,
}

impl RequestCoordinator {
    pub fn new(request_tx: Sender<SuggestRequest>, response_rx: Receiver<SuggestResponse>) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            request_id: 0,
            active: None,
        }
    }

    /// A coordinator with no worker behind it; every request is unavailable
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Issue a fetch for `params`, cancelling the active request first.
    ///
    /// Returns the new request id, or `None` when there is no worker to send
    /// to.
    pub fn request(&mut self, params: SuggestParams) -> Option<u64> {
        self.cancel();

        let tx = self.request_tx.as_ref()?;

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let cancel_token = CancellationToken::new();

        let sent = tx.send(SuggestRequest::Fetch {
            params,
            request_id,
            cancel_token: cancel_token.clone(),
        });

        if sent.is_err() {
            log::debug!("Suggestion worker is gone, dropping request {}", request_id);
            self.request_tx = None;
            return None;
        }

        self.active = Some(ActiveRequest {
            request_id,
            cancel_token,
        });
        Some(request_id)
    }

    /// Cancel the active request, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                log::debug!("Cancelling in-flight request {}", active.request_id);
                active.cancel_token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn has_active_request(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_request_id(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.request_id)
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Drain worker responses without blocking.
    ///
    /// Returns at most one outcome: the one belonging to the active request.
    /// The active request is finished once its outcome is returned.
    pub fn poll(&mut self) -> Option<SuggestOutcome> {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(ref rx) = self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        let mut outcome = None;
        for response in responses {
            if let Some(o) = self.accept(response) {
                outcome = Some(o);
            }
        }

        if disconnected {
            self.response_rx = None;
            self.request_tx = None;
            if self.active.take().is_some() {
                log::error!("Suggestion worker disconnected with a request in flight");
                outcome = Some(SuggestOutcome::Unavailable);
            }
        }

        outcome
    }

    fn accept(&mut self, response: SuggestResponse) -> Option<SuggestOutcome> {
        if let SuggestResponse::WorkerPanicked(message) = response {
            log::error!("Suggestion worker crashed: {}", message);
            self.request_tx = None;
            return self.active.take().map(|_| SuggestOutcome::Unavailable);
        }

        let active_id = self.active_request_id()?;
        if response.request_id() != Some(active_id) {
            log::debug!("Dropping stale response {:?}", response.request_id());
            return None;
        }

        match response {
            SuggestResponse::Loaded {
                key, suggestions, ..
            } => {
                self.active = None;
                Some(SuggestOutcome::Loaded { key, suggestions })
            }
            SuggestResponse::Failed { message, .. } => {
                log::debug!("Suggestions unavailable: {}", message);
                self.active = None;
                Some(SuggestOutcome::Unavailable)
            }
            // Only reachable if the token was cancelled outside `cancel()`
            SuggestResponse::Cancelled { .. } => {
                self.active = None;
                None
            }
            SuggestResponse::WorkerPanicked(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
