//! Error types used by taskwarden workers and the host.
//!
//! This module defines two main error enums:
//!
//! - [`TaskError`] — errors raised by a unit of work or by the interruptible wait.
//! - [`RuntimeError`] — errors reported by the [`Host`](crate::Host) once its workers are gone.
//!
//! Both types provide an `as_label` helper for logs/metrics.

use std::any::Any;
use std::time::Duration;
use thiserror::Error;

/// Boxed error carried by [`TaskError::Fail`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by a unit of work.
///
/// `Canceled` is not a fault when the run's token was cancelled: the worker
/// turns it into [`Outcome::Cancelled`](crate::Outcome::Cancelled) and never
/// logs it. A `Canceled` without a cancelled token, and every other variant,
/// is fatal to the worker.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Work (or the wait between iterations) failed.
    ///
    /// The boxed error is passed to the logger and returned to the caller as-is.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error.
        error: BoxError,
    },

    /// The cancellation signal was observed.
    #[error("context cancelled")]
    Canceled,
}

impl TaskError {
    /// Wraps any error (or message) into [`TaskError::Fail`].
    ///
    /// # Example
    /// ```
    /// use taskwarden::TaskError;
    ///
    /// let err = TaskError::fail("disk full");
    /// assert_eq!(err.to_string(), "execution failed: disk full");
    /// ```
    pub fn fail(error: impl Into<BoxError>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskwarden::TaskError;
    ///
    /// assert_eq!(TaskError::Canceled.as_label(), "task_canceled");
    /// assert_eq!(TaskError::fail("boom").as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Canceled => "task_canceled",
        }
    }

    /// Returns `true` for [`TaskError::Canceled`].
    pub fn is_canceled(&self) -> bool {
        matches!(self, TaskError::Canceled)
    }
}

/// # Errors reported by the host.
///
/// A worker fault always ends the host run; the first one observed is returned.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A worker stopped with an error.
    #[error("worker {worker:?} faulted: {source}")]
    WorkerFaulted {
        /// Name of the faulted worker.
        worker: String,
        /// The fault the worker returned, unchanged.
        #[source]
        source: TaskError,
    },

    /// A worker (or its logger) panicked.
    #[error("worker {worker:?} panicked: {message}")]
    WorkerPanicked {
        /// Name of the panicked worker.
        worker: String,
        /// Panic message, if it was a string.
        message: String,
    },

    /// Workers did not stop within the grace period.
    #[error("shutdown timeout {grace:?} exceeded; stuck: {stuck:?}")]
    GraceExceeded {
        /// The configured grace duration.
        grace: Duration,
        /// Workers that were still running.
        stuck: Vec<String>,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskwarden::RuntimeError;
    /// use std::time::Duration;
    ///
    /// let err = RuntimeError::GraceExceeded { grace: Duration::from_secs(5), stuck: vec![] };
    /// assert_eq!(err.as_label(), "runtime_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::WorkerFaulted { .. } => "runtime_worker_faulted",
            RuntimeError::WorkerPanicked { .. } => "runtime_worker_panicked",
            RuntimeError::GraceExceeded { .. } => "runtime_grace_exceeded",
        }
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_keeps_message() {
        let err = TaskError::fail("disk full");
        match err {
            TaskError::Fail { error } => assert_eq!(error.to_string(), "disk full"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_is_canceled() {
        assert!(TaskError::Canceled.is_canceled());
        assert!(!TaskError::fail("disk full").is_canceled());
    }

    #[test]
    fn test_faulted_exposes_source() {
        use std::error::Error as _;

        let err = RuntimeError::WorkerFaulted {
            worker: "heartbeat".into(),
            source: TaskError::fail("disk full"),
        };
        assert_eq!(
            err.to_string(),
            "worker \"heartbeat\" faulted: execution failed: disk full"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_panic_message_variants() {
        let s: Box<dyn Any + Send> = Box::new("static");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let other: Box<dyn Any + Send> = Box::new(42u8);

        assert_eq!(panic_message(&*s), "static");
        assert_eq!(panic_message(&*owned), "owned");
        assert_eq!(panic_message(&*other), "unknown panic");
    }
}
