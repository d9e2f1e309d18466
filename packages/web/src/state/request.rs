//! Request generation tracking
//!
//! A component takes a ticket before issuing a request and checks it when the
//! response arrives. Teardown or a newer request bumps the generation, so a
//! response that outlived its view is dropped instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter shared between a component and its in-flight requests
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

/// Proof that a request was issued at a given generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any earlier one
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    /// Whether a response for this ticket should still be applied
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Drop every outstanding ticket (call on teardown)
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(&first));

        let second = tracker.begin();
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn invalidate_drops_outstanding_tickets() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_current(&ticket));
    }

    #[test]
    fn clones_share_the_generation() {
        let tracker = RequestTracker::new();
        let handle = tracker.clone();
        let ticket = tracker.begin();
        handle.invalidate();
        assert!(!tracker.is_current(&ticket));
    }
}
