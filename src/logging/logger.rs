//! # Logger trait and fault view.

use std::fmt;
use std::time::SystemTime;

use crate::error::TaskError;

/// Borrowed view of the fault that stopped a worker.
///
/// The logger only ever borrows the fault; the worker keeps ownership and
/// propagates the very same value afterwards.
#[derive(Clone, Copy, Debug)]
pub enum Fault<'a> {
    /// Work or wait returned an error.
    Error(&'a TaskError),
    /// Work or wait panicked; carries the panic message.
    Panic(&'a str),
}

impl<'a> Fault<'a> {
    /// Returns the error if this fault is an [`Fault::Error`].
    pub fn as_error(&self) -> Option<&'a TaskError> {
        match *self {
            Fault::Error(e) => Some(e),
            Fault::Panic(_) => None,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Fault::Error(e) => e.as_label(),
            Fault::Panic(_) => "task_panicked",
        }
    }
}

impl fmt::Display for Fault<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Error(e) => write!(f, "{e}"),
            Fault::Panic(msg) => write!(f, "panicked: {msg}"),
        }
    }
}

/// Structured log sink used by the worker.
///
/// ### Implementation requirements
/// - Calls are synchronous and happen on the worker's task; keep them cheap.
/// - Do not panic. If [`critical`](Logger::critical) panics anyway, that panic
///   replaces the original fault (the host is still told to shut down).
pub trait Logger: Send + Sync + 'static {
    /// Routine entry written at the start of each iteration.
    fn info(&self, worker: &str, iteration: u64, at: SystemTime);

    /// Fatal entry written once, at the point of failure.
    fn critical(&self, worker: &str, fault: &Fault<'_>);
}
