//! # TracingLogger — `tracing` backed sink
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO  taskwarden: worker running worker="heartbeat" iteration=4 at_ms=1760870000000
//! ERROR taskwarden: fatal error worker="heartbeat" label="task_failed" error=execution failed: disk full
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use crate::logging::{Fault, Logger};

/// Logger that forwards entries to `tracing`.
///
/// Critical entries are emitted at `ERROR`, the highest `tracing` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Construct a new [`TracingLogger`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, worker: &str, iteration: u64, at: SystemTime) {
        let at_ms = at
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        tracing::info!(target: "taskwarden", worker, iteration, at_ms, "worker running");
    }

    fn critical(&self, worker: &str, fault: &Fault<'_>) {
        match fault.as_error() {
            Some(err) => tracing::error!(
                target: "taskwarden",
                worker,
                label = fault.as_label(),
                error = err as &(dyn std::error::Error + 'static),
                "fatal error"
            ),
            None => tracing::error!(
                target: "taskwarden",
                worker,
                label = fault.as_label(),
                error = %fault,
                "fatal error"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;

    #[test]
    fn test_entries_without_subscriber_do_not_panic() {
        let logger = TracingLogger::new();
        logger.info("heartbeat", 1, SystemTime::now());
        logger.critical("heartbeat", &Fault::Error(&TaskError::fail("disk full")));
        logger.critical("heartbeat", &Fault::Panic("boom"));
    }

    #[test]
    fn test_far_future_timestamp_saturates() {
        let far = UNIX_EPOCH
            .checked_add(std::time::Duration::from_secs(1 << 60))
            .unwrap();
        TracingLogger::new().info("heartbeat", 1, far);
    }

    #[test]
    fn test_fault_display() {
        let err = TaskError::fail("disk full");
        assert_eq!(
            Fault::Error(&err).to_string(),
            "execution failed: disk full"
        );
        assert_eq!(Fault::Panic("boom").to_string(), "panicked: boom");
        assert_eq!(Fault::Panic("boom").as_label(), "task_panicked");
    }
}
