//! # Application lifetime (shutdown controller).
//!
//! [`Lifetime`] is the single operation a worker needs from its host: ask for
//! the process to shut down. Requests must be idempotent.
//!
//! [`AppLifetime`] is the default implementation. Its stopping token is also
//! the cancellation signal handed to workers by the [`Host`](crate::Host), so a
//! worker that exits for any reason brings the others down with it.
//!
//! [`ShutdownGuard`] requests shutdown when dropped, which covers every way a
//! worker run can end, including unwinding.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

/// Host-provided "begin shutdown" operation.
///
/// Implementations must tolerate any number of calls; only the first one may
/// have an observable effect.
pub trait Lifetime: Send + Sync + 'static {
    /// Requests an orderly shutdown of the host.
    fn request_shutdown(&self);
}

/// Default lifetime backed by a [`CancellationToken`].
#[derive(Debug, Default)]
pub struct AppLifetime {
    stopping: CancellationToken,
    requested: AtomicBool,
}

impl AppLifetime {
    /// Creates a lifetime that has not been asked to stop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stopping token (cancelled once shutdown is requested).
    pub fn token(&self) -> CancellationToken {
        self.stopping.clone()
    }

    /// Returns `true` once shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Completes when shutdown has been requested.
    pub async fn stopping(&self) {
        self.stopping.cancelled().await
    }
}

impl Lifetime for AppLifetime {
    fn request_shutdown(&self) {
        if self.requested.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::info!(target: "taskwarden", "application shutdown requested");
        self.stopping.cancel();
    }
}

/// Requests shutdown on drop.
#[must_use = "the guard requests shutdown when dropped"]
pub(crate) struct ShutdownGuard {
    lifetime: Arc<dyn Lifetime>,
}

impl ShutdownGuard {
    pub(crate) fn new(lifetime: Arc<dyn Lifetime>) -> Self {
        Self { lifetime }
    }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        self.lifetime.request_shutdown();
    }
}
