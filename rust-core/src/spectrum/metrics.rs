//! Read-access instrumentation for complexity testing

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts the element reads performed by a transform.
///
/// Purely diagnostic: the `*_counted` transform variants accept one of these
/// so tests can verify the Θ(N²) and Θ(N·log N) contracts. The uncounted
/// entry points never touch a counter, so production call paths carry no
/// shared mutable state.
#[derive(Debug, Default)]
pub struct ReadCounter {
    reads: AtomicU64,
}

impl ReadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.reads.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let counter = ReadCounter::new();
        assert_eq!(counter.count(), 0);
        counter.record();
        counter.record();
        assert_eq!(counter.count(), 2);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
