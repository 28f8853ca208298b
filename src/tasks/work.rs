//! # Work abstraction.
//!
//! A [`Work`] is called once per iteration with a [`Tick`]. It returns a fresh
//! boxed future each time so that no state leaks between iterations unless the
//! implementor shares it explicitly (e.g. through `Arc`).
//!
//! Work should return `Err(TaskError::Canceled)` when it notices the token was
//! cancelled mid-way; any other error is a fault and stops the worker.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Boxed future returned by [`Work::tick`].
pub type BoxWorkFuture = Pin<Box<dyn Future<Output = Result<(), TaskError>> + Send + 'static>>;

/// Shared handle to a unit of work.
pub type WorkRef = Arc<dyn Work>;

/// Context for a single iteration.
#[derive(Clone, Debug)]
pub struct Tick {
    /// 1-based iteration number within the current run.
    pub iteration: u64,
    /// The worker's cancellation signal (observe only).
    pub token: CancellationToken,
}

/// # One iteration of work.
///
/// # Example
/// ```
/// use taskwarden::{BoxWorkFuture, TaskError, Tick, Work};
///
/// struct Flush;
///
/// impl Work for Flush {
///     fn tick(&self, tick: Tick) -> BoxWorkFuture {
///         Box::pin(async move {
///             if tick.token.is_cancelled() {
///                 return Err(TaskError::Canceled);
///             }
///             // flush buffers...
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Work: Send + Sync + 'static {
    /// Creates the future for one iteration.
    fn tick(&self, tick: Tick) -> BoxWorkFuture;
}

/// Work that does nothing.
///
/// A worker running `Idle` only emits its per-iteration log entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl Work for Idle {
    fn tick(&self, _tick: Tick) -> BoxWorkFuture {
        Box::pin(async { Ok(()) })
    }
}
