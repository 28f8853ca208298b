//! # Worker and host configuration.
//!
//! Provides [`WorkerConfig`] (per-worker loop settings) and [`HostConfig`]
//! (host shutdown settings).
//!
//! ## Sentinel values
//! - `max_iterations = 0` → unbounded loop (runs until cancelled or faulted)
//! - `grace = 0s` → the host does not wait for workers after shutdown is requested

use std::borrow::Cow;
use std::time::Duration;

/// Settings for a single [`SupervisedWorker`](crate::SupervisedWorker).
///
/// ## Field semantics
/// - `name`: Worker name used in log entries and host errors
/// - `interval`: Interruptible wait between iterations
/// - `max_iterations`: Iteration bound (`0` = unbounded)
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Worker name.
    pub name: Cow<'static, str>,

    /// Pause between two iterations.
    ///
    /// The pause is interrupted as soon as the cancellation signal fires.
    pub interval: Duration,

    /// Maximum number of iterations before the worker completes.
    ///
    /// - `0` = unbounded (the usual case for a background service)
    /// - `n > 0` = the worker stops with [`Outcome::Completed`](crate::Outcome::Completed)
    ///   after `n` iterations
    pub max_iterations: u64,
}

impl WorkerConfig {
    /// Creates a config with the given name and default timings.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the iteration bound as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(n)` → at most `n` iterations
    #[inline]
    pub fn iteration_limit(&self) -> Option<u64> {
        if self.max_iterations == 0 {
            None
        } else {
            Some(self.max_iterations)
        }
    }
}

impl Default for WorkerConfig {
    /// Default configuration:
    ///
    /// - `name = "worker"`
    /// - `interval = 1s`
    /// - `max_iterations = 0` (unbounded)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("worker"),
            interval: Duration::from_secs(1),
            max_iterations: 0,
        }
    }
}

/// Settings for the [`Host`](crate::Host).
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Maximum time to wait for workers once shutdown has been requested.
    ///
    /// If exceeded, [`Host::run`](crate::Host::run) returns
    /// [`RuntimeError::GraceExceeded`](crate::RuntimeError::GraceExceeded)
    /// (unless a worker already faulted).
    pub grace: Duration,
}

impl Default for HostConfig {
    /// Default configuration: `grace = 30s`.
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let cfg = WorkerConfig::default();
        assert_eq!(cfg.name, "worker");
        assert_eq!(cfg.interval, Duration::from_secs(1));
        assert_eq!(cfg.iteration_limit(), None);
    }

    #[test]
    fn test_iteration_limit() {
        let cfg = WorkerConfig {
            max_iterations: 3,
            ..WorkerConfig::named("bounded")
        };
        assert_eq!(cfg.name, "bounded");
        assert_eq!(cfg.iteration_limit(), Some(3));
    }
}
