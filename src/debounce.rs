//! Debounce Utilities
//!
//! A generation counter shared by a debounced action and its in-flight
//! responses: only the most recently armed ticket may fire or apply.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

#[derive(Clone, Default, Debug)]
pub struct LatestGate {
    generation: Arc<AtomicU64>,
}

/// Proof of which generation started a piece of work
#[derive(Clone, Debug)]
pub struct Ticket {
    gate: LatestGate,
    id: u64,
}

impl LatestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and hand out a fresh one
    pub fn arm(&self) -> Ticket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { gate: self.clone(), id }
    }

    /// Invalidate without starting new work
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.gate.generation.load(Ordering::SeqCst) == self.id
    }
}

/// Run `task` after `delay_ms` unless a newer call arrives first.
/// The task receives its ticket to discard stale responses.
pub fn debounce<F, Fut>(gate: &LatestGate, delay_ms: u32, task: F)
where
    F: FnOnce(Ticket) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let ticket = gate.arm();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if ticket.is_current() {
            task(ticket).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let gate = LatestGate::new();
        let first = gate.arm();
        let second = gate.arm();
        let third = gate.arm();
        assert!(!first.is_current());
        assert!(!second.is_current());
        assert!(third.is_current());
    }

    #[test]
    fn test_burst_of_keystrokes_fires_once() {
        let gate = LatestGate::new();
        let tickets: Vec<Ticket> = "proj".chars().map(|_| gate.arm()).collect();
        let firing = tickets.iter().filter(|t| t.is_current()).count();
        assert_eq!(firing, 1);
        assert!(tickets.last().unwrap().is_current());
    }

    #[test]
    fn test_cancel_invalidates_outstanding_work() {
        let gate = LatestGate::new();
        let ticket = gate.arm();
        gate.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_clones_share_generation() {
        let gate = LatestGate::new();
        let other = gate.clone();
        let ticket = gate.arm();
        other.arm();
        assert!(!ticket.is_current());
    }
}
