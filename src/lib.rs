//! Logring - bounded in-memory log buffer with console forwarding
//!
//! Keeps a queryable recent-history of log activity without unbounded memory
//! growth: the buffer holds the most recent entries, evicts the oldest once
//! capacity is exceeded, and forwards every entry to the severity-matching
//! console channel.

pub mod buffer;
pub mod sink;

pub use buffer::{LogEntry, RingLog, Severity, DEFAULT_MAX_SIZE};
pub use sink::{ConsoleSink, LogSink};

/// Create a ring log with the given capacity, or the default when `None`
///
/// Negative capacities are clamped to zero, as in [`RingLog::new`].
pub fn create_ring_log(max_size: Option<isize>) -> RingLog {
    match max_size {
        Some(max_size) => RingLog::new(max_size),
        None => RingLog::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_with_capacity() {
        let ring = create_ring_log(Some(50));
        assert_eq!(ring.max_size(), 50);
    }

    #[test]
    fn test_factory_with_default_capacity() {
        let ring = create_ring_log(None);
        assert_eq!(ring.max_size(), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_factory_clamps_negative_capacity() {
        let ring = create_ring_log(Some(-1));
        assert_eq!(ring.max_size(), 0);
    }
}
