//! In-flight guard for form submissions.
//!
//! A second submit while the first is still pending is ignored instead of
//! creating a duplicate listing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag marking a submission as pending.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. Returns `None` while another ticket is alive.
    pub fn try_begin(&self) -> Option<SubmissionTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionTicket {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Proof of a pending submission; dropping it releases the guard.
#[derive(Debug)]
pub struct SubmissionTicket {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_rejected_while_pending() {
        let guard = SubmissionGuard::new();
        let ticket = guard.try_begin().expect("first submit should start");

        assert!(guard.is_in_flight());
        assert!(guard.try_begin().is_none());
        assert!(guard.clone().try_begin().is_none());

        drop(ticket);
        assert!(!guard.is_in_flight());
        assert!(guard.try_begin().is_some());
    }
}
