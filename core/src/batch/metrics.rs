//! Executor health metrics
//!
//! Counters for the drain loop, logged periodically so a stalled or
//! failure-heavy queue is visible without a debugger attached.

use std::time::{Duration, Instant};

use tracing::debug;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub(crate) struct ExecutorMetrics {
    pub batches_drained: u64,
    pub items_executed: u64,
    pub blocking_items: u64,
    pub item_failures: u64,
    last_log: Instant,
}

impl ExecutorMetrics {
    pub fn new() -> Self {
        Self {
            batches_drained: 0,
            items_executed: 0,
            blocking_items: 0,
            item_failures: 0,
            last_log: Instant::now(),
        }
    }

    /// Log a stats line at most once per interval.
    pub fn maybe_log(&mut self) {
        if self.last_log.elapsed() < LOG_INTERVAL {
            return;
        }
        debug!(
            batches = self.batches_drained,
            items = self.items_executed,
            blocking = self.blocking_items,
            failures = self.item_failures,
            "executor stats"
        );
        self.last_log = Instant::now();
    }
}
