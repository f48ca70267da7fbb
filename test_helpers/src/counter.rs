//! Side-effect counters for asserting laziness.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts invocations of suppliers and callbacks handed to code under test.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Records one call.
    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a supplier that records a call and yields `value`.
    pub fn supplier<T>(&self, value: T) -> impl FnOnce() -> T {
        move || {
            self.record();
            value
        }
    }
}
