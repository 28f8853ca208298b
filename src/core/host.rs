//! # Host: runs workers until the application is asked to stop.
//!
//! The [`Host`] owns an [`AppLifetime`]. Its stopping token is the cancellation
//! signal of every worker, and every worker requests shutdown on exit, so one
//! worker stopping for any reason stops the whole host.
//!
//! ## Flow
//! ```text
//! run(workers)
//!   ├─► JoinSet.spawn(worker.run(lifetime.token()))      (one per worker)
//!   │
//!   ├─► select:
//!   │     ├─ OS signal             ─► lifetime.request_shutdown()
//!   │     └─ lifetime.stopping()   (a worker exited and requested shutdown)
//!   │
//!   └─► wait_all_with_grace(cfg.grace):
//!          ├─ all joined  ─► first worker fault/panic, or Ok(())
//!          └─ timeout     ─► first worker fault/panic, or GraceExceeded{stuck}
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{Id, JoinSet};

use crate::{
    config::HostConfig,
    core::{
        lifetime::{AppLifetime, Lifetime},
        shutdown,
        worker::{Outcome, SupervisedWorker},
    },
    error::{RuntimeError, TaskError, panic_message},
};

/// Hosts supervised workers and turns their exit into the process result.
pub struct Host {
    cfg: HostConfig,
    lifetime: Arc<AppLifetime>,
}

impl Host {
    /// Creates a host with a fresh lifetime.
    pub fn new(cfg: HostConfig) -> Self {
        Self::with_lifetime(cfg, Arc::new(AppLifetime::new()))
    }

    /// Creates a host around an existing lifetime.
    pub fn with_lifetime(cfg: HostConfig, lifetime: Arc<AppLifetime>) -> Self {
        Self { cfg, lifetime }
    }

    /// Shared lifetime; pass it to [`SupervisedWorker::builder`].
    pub fn lifetime(&self) -> Arc<AppLifetime> {
        Arc::clone(&self.lifetime)
    }

    /// Runs `workers` until shutdown is requested, then waits for them within
    /// [`HostConfig::grace`].
    ///
    /// Shutdown is requested by an OS termination signal, by any worker exiting,
    /// or by anyone holding the lifetime.
    pub async fn run(&self, workers: Vec<SupervisedWorker>) -> Result<(), RuntimeError> {
        let mut set = JoinSet::new();
        let mut names = HashMap::with_capacity(workers.len());
        for worker in workers {
            let name = worker.name().to_owned();
            let token = self.lifetime.token();
            let handle = set.spawn(async move { worker.run(token).await });
            names.insert(handle.id(), name);
        }
        tracing::info!(target: "taskwarden", workers = names.len(), "host started");

        if set.is_empty() {
            self.lifetime.request_shutdown();
        }
        tokio::select! {
            _ = shutdown::signal_or_pending() => self.lifetime.request_shutdown(),
            _ = self.lifetime.stopping() => {}
        }

        self.wait_all_with_grace(&mut set, &mut names).await
    }

    /// Joins all workers within the grace period.
    ///
    /// A worker fault takes precedence over a grace timeout.
    async fn wait_all_with_grace(
        &self,
        set: &mut JoinSet<Result<Outcome, TaskError>>,
        names: &mut HashMap<Id, String>,
    ) -> Result<(), RuntimeError> {
        let grace = self.cfg.grace;
        let mut first: Option<RuntimeError> = None;

        let done = async {
            while let Some(joined) = set.join_next_with_id().await {
                let err = match joined {
                    Ok((id, Ok(_outcome))) => {
                        names.remove(&id);
                        None
                    }
                    Ok((id, Err(source))) => Some(RuntimeError::WorkerFaulted {
                        worker: names.remove(&id).unwrap_or_default(),
                        source,
                    }),
                    Err(join_err) => {
                        let worker = names.remove(&join_err.id()).unwrap_or_default();
                        if join_err.is_panic() {
                            let message = panic_message(&*join_err.into_panic());
                            Some(RuntimeError::WorkerPanicked { worker, message })
                        } else {
                            None
                        }
                    }
                };
                if first.is_none() {
                    first = err;
                }
            }
        };
        let timed = tokio::time::timeout(grace, done).await;

        match (timed, first) {
            (_, Some(err)) => {
                tracing::error!(target: "taskwarden", label = err.as_label(), error = %err, "host stopped");
                Err(err)
            }
            (Ok(()), None) => {
                tracing::info!(target: "taskwarden", "all workers stopped within grace");
                Ok(())
            }
            (Err(_elapsed), None) => {
                let mut stuck: Vec<String> = names.drain().map(|(_, name)| name).collect();
                stuck.sort();
                tracing::warn!(target: "taskwarden", ?grace, ?stuck, "grace exceeded");
                Err(RuntimeError::GraceExceeded { grace, stuck })
            }
        }
    }
}
