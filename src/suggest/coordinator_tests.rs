//! Tests for request coordination

use super::*;
use crate::test_utils::test_helpers::{params, suggestions};
use std::sync::mpsc;

struct Harness {
    coordinator: RequestCoordinator,
    requests: Receiver<SuggestRequest>,
    responses: Sender<SuggestResponse>,
}

fn harness() -> Harness {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    Harness {
        coordinator: RequestCoordinator::new(request_tx, response_rx),
        requests: request_rx,
        responses: response_tx,
    }
}

fn loaded(request_id: u64, query: &str, labels: &[&str]) -> SuggestResponse {
    SuggestResponse::Loaded {
        request_id,
        key: CacheKey::new("negocios", query),
        suggestions: suggestions(labels),
    }
}

fn sent_token(requests: &Receiver<SuggestRequest>) -> (u64, CancellationToken) {
    match requests.try_recv().unwrap() {
        SuggestRequest::Fetch {
            request_id,
            cancel_token,
            ..
        } => (request_id, cancel_token),
    }
}

#[test]
fn test_request_sends_fetch_with_fresh_id() {
    let mut h = harness();

    let id = h.coordinator.request(params("piz")).unwrap();
    assert_eq!(id, 1);
    assert!(h.coordinator.has_active_request());

    let (sent_id, token) = sent_token(&h.requests);
    assert_eq!(sent_id, 1);
    assert!(!token.is_cancelled());
}

#[test]
fn test_new_request_cancels_previous() {
    let mut h = harness();

    h.coordinator.request(params("piz"));
    let (_, first_token) = sent_token(&h.requests);

    let id = h.coordinator.request(params("pizza")).unwrap();
    assert_eq!(id, 2);
    assert!(first_token.is_cancelled());
    assert_eq!(h.coordinator.active_request_id(), Some(2));
}

#[test]
fn test_at_most_one_active_request() {
    let mut h = harness();

    for q in ["p", "pi", "piz", "pizz", "pizza"] {
        h.coordinator.request(params(q));
    }

    let tokens: Vec<_> = h.requests.try_iter().collect();
    assert_eq!(tokens.len(), 5);
    let live = tokens
        .iter()
        .filter(|r| match r {
            SuggestRequest::Fetch { cancel_token, .. } => !cancel_token.is_cancelled(),
        })
        .count();
    assert_eq!(live, 1);
}

#[test]
fn test_poll_returns_active_outcome() {
    let mut h = harness();
    h.coordinator.request(params("piz"));

    h.responses
        .send(loaded(1, "piz", &["Pizza YA", "Pizzeria Roma"]))
        .unwrap();

    assert_eq!(
        h.coordinator.poll(),
        Some(SuggestOutcome::Loaded {
            key: CacheKey::new("negocios", "piz"),
            suggestions: suggestions(&["Pizza YA", "Pizzeria Roma"]),
        })
    );
    assert!(!h.coordinator.has_active_request());
}

#[test]
fn test_stale_response_is_dropped_even_when_last() {
    let mut h = harness();
    h.coordinator.request(params("piz"));
    h.coordinator.request(params("pizza"));

    // The newer reply lands first, the superseded one afterwards
    h.responses
        .send(loaded(2, "pizza", &["Pizzeria Roma"]))
        .unwrap();
    h.responses
        .send(loaded(1, "piz", &["Pizza YA", "Pizzeria Roma"]))
        .unwrap();

    assert_eq!(
        h.coordinator.poll(),
        Some(SuggestOutcome::Loaded {
            key: CacheKey::new("negocios", "pizza"),
            suggestions: suggestions(&["Pizzeria Roma"]),
        })
    );
    assert_eq!(h.coordinator.poll(), None);
}

#[test]
fn test_stale_response_before_active_is_dropped() {
    let mut h = harness();
    h.coordinator.request(params("piz"));
    h.coordinator.request(params("pizza"));

    h.responses
        .send(loaded(1, "piz", &["Pizza YA", "Pizzeria Roma"]))
        .unwrap();
    assert_eq!(h.coordinator.poll(), None);
    assert!(h.coordinator.has_active_request());
}

#[test]
fn test_failure_maps_to_unavailable() {
    let mut h = harness();
    h.coordinator.request(params("piz"));

    h.responses
        .send(SuggestResponse::Failed {
            request_id: 1,
            message: "HTTP error (502)".to_string(),
        })
        .unwrap();

    assert_eq!(h.coordinator.poll(), Some(SuggestOutcome::Unavailable));
}

#[test]
fn test_cancelled_response_is_swallowed() {
    let mut h = harness();
    h.coordinator.request(params("piz"));
    h.coordinator.cancel();

    h.responses
        .send(SuggestResponse::Cancelled { request_id: 1 })
        .unwrap();
    assert_eq!(h.coordinator.poll(), None);
}

#[test]
fn test_response_after_cancel_is_dropped() {
    let mut h = harness();
    h.coordinator.request(params("piz"));
    assert!(h.coordinator.cancel());
    assert!(!h.coordinator.cancel());

    h.responses.send(loaded(1, "piz", &["Pizza YA"])).unwrap();
    assert_eq!(h.coordinator.poll(), None);
}

#[test]
fn test_worker_panic_with_active_request() {
    let mut h = harness();
    h.coordinator.request(params("piz"));

    h.responses
        .send(SuggestResponse::WorkerPanicked("boom".to_string()))
        .unwrap();

    assert_eq!(h.coordinator.poll(), Some(SuggestOutcome::Unavailable));
    assert!(!h.coordinator.is_connected());
    assert_eq!(h.coordinator.request(params("pizza")), None);
}

#[test]
fn test_disconnect_with_active_request() {
    let mut h = harness();
    h.coordinator.request(params("piz"));
    drop(h.responses);

    assert_eq!(h.coordinator.poll(), Some(SuggestOutcome::Unavailable));
    assert!(!h.coordinator.is_connected());
}

#[test]
fn test_disconnect_when_idle_is_silent() {
    let mut h = harness();
    drop(h.responses);
    assert_eq!(h.coordinator.poll(), None);
}

#[test]
fn test_send_failure_returns_none() {
    let mut h = harness();
    drop(h.requests);

    assert_eq!(h.coordinator.request(params("piz")), None);
    assert!(!h.coordinator.has_active_request());
    assert!(!h.coordinator.is_connected());
}

#[test]
fn test_disconnected_coordinator() {
    let mut coordinator = RequestCoordinator::disconnected();
    assert_eq!(coordinator.request(params("piz")), None);
    assert_eq!(coordinator.poll(), None);
}
