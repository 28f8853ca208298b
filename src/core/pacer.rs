//! # Interruptible wait between iterations.
//!
//! [`Pacer::pause`] waits for `delay` but returns early with
//! [`TaskError::Canceled`] once the cancellation token fires. Any other error it
//! returns is a fault, same as an error from the work itself.

use std::time::Duration;

use async_trait::async_trait;
use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Interruptible wait primitive.
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    /// Waits `delay`, or until `token` is cancelled.
    ///
    /// Returns `Ok(())` when the delay elapsed and `Err(TaskError::Canceled)`
    /// when cancellation won. `Canceled` while `token` is not cancelled is
    /// treated as a fault by the worker.
    async fn pause(&self, delay: Duration, token: &CancellationToken) -> Result<(), TaskError>;
}

/// Pacer backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration, token: &CancellationToken) -> Result<(), TaskError> {
        let sleep = time::sleep(delay);
        tokio::pin!(sleep);
        select! {
            biased;
            _ = token.cancelled() => Err(TaskError::Canceled),
            _ = &mut sleep => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pause_elapses() {
        let token = CancellationToken::new();
        let start = time::Instant::now();
        TokioPacer
            .pause(Duration::from_secs(1), &token)
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_pause() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let start = time::Instant::now();
        let res = TokioPacer.pause(Duration::from_secs(60), &token).await;
        assert!(matches!(res, Err(TaskError::Canceled)));
        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_returns_immediately() {
        let token = CancellationToken::new();
        token.cancel();
        let res = TokioPacer.pause(Duration::from_secs(60), &token).await;
        assert!(matches!(res, Err(TaskError::Canceled)));
    }
}
