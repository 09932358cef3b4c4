//! Suggestion worker thread
//!
//! Runs suggestion fetches off the UI thread. Receives requests via channel,
//! races each fetch against its cancellation token on a current-thread tokio
//! runtime, and reports the outcome back through the response channel.
//!
//! Includes panic handling so a crash in the HTTP stack never corrupts the TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::source::{SuggestError, SuggestionSource};
use super::types::{SuggestParams, SuggestRequest, SuggestResponse};

/// Spawn the suggestion worker thread for the given source
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::thread::JoinHandle<()>
where
    S: SuggestionSource + Send + 'static,
{
    std::thread::spawn(move || {
        // The default panic hook prints to stderr, which corrupts the TUI.
        // The hook is process-wide: panics on other threads go to the previous one.
        let worker_id = std::thread::current().id();
        let response_tx_clone = response_tx.clone();
        let prev_hook = Arc::new(panic::take_hook());
        let chained = Arc::clone(&prev_hook);
        panic::set_hook(Box::new(move |panic_info| {
            if std::thread::current().id() != worker_id {
                chained(panic_info);
                return;
            }
            let panic_msg = panic_message(panic_info.payload());
            log::error!(
                "Suggestion worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );
            let _ = response_tx_clone.send(SuggestResponse::WorkerPanicked(panic_msg));
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(source, request_rx, response_tx));
        }));

        panic::set_hook(Box::new(move |panic_info| prev_hook(panic_info)));

        if let Err(e) = result {
            log::error!("Suggestion worker thread panicked: {}", panic_message(&*e));
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in suggestion worker".to_string()
    }
}

/// Process requests until the request channel is closed
///
/// Blocking `recv()` is fine here: the runtime belongs to this thread alone.
/// A newer request can only be picked up once the current fetch returns, so
/// the sender cancels the previous token before queueing the next request.
pub(crate) async fn worker_loop<S: SuggestionSource>(
    source: S,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SuggestRequest::Fetch {
                params,
                request_id,
                cancel_token,
            } => {
                let response = handle_fetch(&source, params, request_id, cancel_token).await;
                if response_tx.send(response).is_err() {
                    // UI side is gone
                    break;
                }
            }
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("Suggestion worker loop exiting");
}

async fn handle_fetch<S: SuggestionSource>(
    source: &S,
    params: SuggestParams,
    request_id: u64,
    cancel_token: CancellationToken,
) -> SuggestResponse {
    if cancel_token.is_cancelled() {
        return SuggestResponse::Cancelled { request_id };
    }

    let result = tokio::select! {
        biased;

        _ = cancel_token.cancelled() => Err(SuggestError::Cancelled),
        result = source.fetch(&params) => result,
    };

    match result {
        Ok(suggestions) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Request {} for {:?} returned {} suggestions",
                request_id,
                params.query,
                suggestions.len()
            );
            SuggestResponse::Loaded {
                request_id,
                key: params.cache_key(),
                suggestions,
            }
        }
        Err(SuggestError::Cancelled) => {
            log::debug!("Request {} cancelled", request_id);
            SuggestResponse::Cancelled { request_id }
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            SuggestResponse::Failed {
                request_id,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
