//! # Closure-backed work (`WorkFn`)
//!
//! [`WorkFn`] wraps a closure `F: Fn(Tick) -> Fut`, producing a fresh future per
//! iteration.
//!
//! ## Example
//! ```rust
//! use taskwarden::{TaskError, Tick, WorkFn, WorkRef};
//!
//! let w: WorkRef = WorkFn::arc(|tick: Tick| async move {
//!     if tick.iteration == 3 {
//!         return Err(TaskError::fail("disk full"));
//!     }
//!     Ok(())
//! });
//! # let _ = w;
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::error::TaskError;
use crate::tasks::work::{BoxWorkFuture, Tick, Work};

/// Closure-backed work.
pub struct WorkFn<F> {
    f: F,
}

impl<F> WorkFn<F> {
    /// Creates new closure-backed work.
    ///
    /// Prefer [`WorkFn::arc`] when you immediately need a [`WorkRef`](crate::WorkRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the work and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F, Fut> Work for WorkFn<F>
where
    F: Fn(Tick) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn tick(&self, tick: Tick) -> BoxWorkFuture {
        Box::pin((self.f)(tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_fresh_future_per_tick() {
        let seen = Arc::new(AtomicU64::new(0));
        let work = {
            let seen = Arc::clone(&seen);
            WorkFn::new(move |tick: Tick| {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(tick.iteration, Ordering::Relaxed);
                    Ok(())
                }
            })
        };

        let token = CancellationToken::new();
        for iteration in 1..=3 {
            work.tick(Tick {
                iteration,
                token: token.clone(),
            })
            .await
            .unwrap();
        }
        assert_eq!(seen.load(Ordering::Relaxed), 6);
    }

    #[tokio::test]
    async fn test_error_is_returned_as_is() {
        let work = WorkFn::new(|_tick: Tick| async { Err::<(), _>(TaskError::fail("disk full")) });
        let err = work
            .tick(Tick {
                iteration: 1,
                token: CancellationToken::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "execution failed: disk full");
    }
}
