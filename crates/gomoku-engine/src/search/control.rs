//! Search control: external stop flag and optional node budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Checked at every node. The flag is shared with whoever started the
/// search, so a game reset or pause can abandon a search in flight.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    node_limit: Option<u64>,
}

impl SearchControl {
    /// Create control that only responds to the external stop flag.
    pub fn new(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            node_limit: None,
        }
    }

    /// Create control with a private flag that nobody else can raise.
    pub fn unbounded() -> Self {
        Self::new(Arc::new(AtomicBool::new(false)))
    }

    /// Also stop once `limit` nodes have been visited.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Check whether the search should abort.
    ///
    /// When the node budget runs out the stop flag is raised, so later
    /// calls return immediately.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if let Some(limit) = self.node_limit
            && nodes >= limit
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Return `true` once the search has been told to stop.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Raise the stop flag.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Time since this control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_stops_by_itself() {
        let control = SearchControl::unbounded();
        assert!(!control.should_stop(0));
        assert!(!control.should_stop(u64::MAX));
    }

    #[test]
    fn external_flag_stops() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new(Arc::clone(&flag));
        assert!(!control.should_stop(1));
        flag.store(true, Ordering::Release);
        assert!(control.should_stop(1));
        assert!(control.is_stopped());
    }

    #[test]
    fn node_limit_latches_flag() {
        let control = SearchControl::unbounded().with_node_limit(10);
        assert!(!control.should_stop(9));
        assert!(control.should_stop(10));
        // The flag stays raised even for a lower count.
        assert!(control.should_stop(0));
        assert!(control.is_stopped());
    }
}
