//! # SupervisedWorker: a periodic loop that cannot die silently.
//!
//! Runs one [`Work`](crate::Work) per iteration, pauses on an interruptible [`Pacer`]
//! between iterations, and stops on cancellation, on completion of a bounded
//! run, or on the first fault.
//!
//! ## States
//! ```text
//!            ┌─────────── not cancelled, work ok, pause elapsed ───┐
//!            ▼                                                     │
//!        Running ──────────────────────────────────────────────────┘
//!          │  │  │
//!          │  │  └─ token cancelled (top of loop, pause or work) ──► Cancelled   Ok(Outcome::Cancelled)
//!          │  └──── iteration limit reached ──────────────────────► Completed   Ok(Outcome::Completed)
//!          └─────── error or panic from work/pause ───────────────► Faulted     Err(fault) / resumed panic
//! ```
//!
//! ## Fault path
//! ```text
//! drive() ── Err(e) ──► match guard: observe_and_continue(|| logger.critical(&e))
//!                                    │ (logged while `e` is still in place)
//!                                    ▼
//!                       next arm: Err(e)  ── same value ──► caller
//!
//! ShutdownGuard dropped ──► lifetime.request_shutdown()   (every exit path)
//! ```
//!
//! ## Rules
//! - Cancellation is never logged as a fault and never returned as an error.
//!   `TaskError::Canceled` only counts as cancellation once `token` is cancelled.
//! - A fault is logged exactly once, before shutdown is requested and before the
//!   caller sees it.
//! - Shutdown is requested exactly once per run, whatever the outcome.
//! - Nothing is retried.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::time::SystemTime;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;

use crate::{
    config::WorkerConfig,
    core::{
        builder::WorkerBuilder,
        lifetime::{Lifetime, ShutdownGuard},
        pacer::Pacer,
    },
    error::{TaskError, panic_message},
    logging::{Fault, Logger},
    observer::observe_and_continue,
    tasks::{Tick, WorkRef},
};

/// How a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The bounded loop finished all its iterations.
    Completed,
    /// The cancellation signal was observed.
    Cancelled,
}

/// Observable state of a worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    /// Not started yet.
    Idle = 0,
    /// Loop in progress.
    Running = 1,
    /// Stopped on cancellation.
    Cancelled = 2,
    /// Stopped on a fault.
    Faulted = 3,
    /// Bounded loop finished.
    Completed = 4,
}

impl WorkerState {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => WorkerState::Running,
            2 => WorkerState::Cancelled,
            3 => WorkerState::Faulted,
            4 => WorkerState::Completed,
            _ => WorkerState::Idle,
        }
    }

    /// Returns `true` for `Cancelled`, `Faulted` and `Completed`.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            WorkerState::Cancelled | WorkerState::Faulted | WorkerState::Completed
        )
    }
}

impl From<Outcome> for WorkerState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => WorkerState::Completed,
            Outcome::Cancelled => WorkerState::Cancelled,
        }
    }
}

/// Periodic worker that logs every fault and always requests host shutdown.
///
/// Build one with [`SupervisedWorker::builder`]. At most one [`run`](Self::run)
/// should be active per instance.
pub struct SupervisedWorker {
    cfg: WorkerConfig,
    work: WorkRef,
    logger: Arc<dyn Logger>,
    pacer: Arc<dyn Pacer>,
    lifetime: Arc<dyn Lifetime>,
    state: AtomicU8,
    iterations: AtomicU64,
}

impl SupervisedWorker {
    /// Starts building a worker that reports shutdown to `lifetime`.
    pub fn builder(cfg: WorkerConfig, lifetime: Arc<dyn Lifetime>) -> WorkerBuilder {
        WorkerBuilder::new(cfg, lifetime)
    }

    pub(crate) fn new(
        cfg: WorkerConfig,
        work: WorkRef,
        logger: Arc<dyn Logger>,
        pacer: Arc<dyn Pacer>,
        lifetime: Arc<dyn Lifetime>,
    ) -> Self {
        Self {
            cfg,
            work,
            logger,
            pacer,
            lifetime,
            state: AtomicU8::new(WorkerState::Idle as u8),
            iterations: AtomicU64::new(0),
        }
    }

    /// Worker name from its config.
    pub fn name(&self) -> &str {
        &self.cfg.name
    }

    /// Current state.
    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Iterations started by the current (or last) run.
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Acquire)
    }

    /// Runs until cancelled, completed or faulted.
    ///
    /// ### Returns
    /// - `Ok(Outcome::Cancelled)` once `token` is observed cancelled (no error is logged);
    /// - `Ok(Outcome::Completed)` when a bounded loop finished;
    /// - `Err(e)` with the exact error returned by the work or the pause, after it
    ///   was logged through [`Logger::critical`].
    ///
    /// ### Panics
    /// A panic in the work or the pause is logged, then resumed with its original
    /// payload. A panic in [`Logger::critical`] escapes as-is.
    ///
    /// In every case the lifetime is asked to shut down exactly once, after the
    /// fault (if any) was logged.
    pub async fn run(&self, token: CancellationToken) -> Result<Outcome, TaskError> {
        let _shutdown = ShutdownGuard::new(Arc::clone(&self.lifetime));
        self.iterations.store(0, Ordering::Release);
        self.set_state(WorkerState::Running);

        match AssertUnwindSafe(self.drive(&token)).catch_unwind().await {
            Ok(Ok(outcome)) => {
                self.set_state(outcome.into());
                Ok(outcome)
            }
            // `Canceled` counts as cancellation only when this run's token fired;
            // otherwise it is a fault like any other error.
            Ok(Err(e)) if e.is_canceled() && token.is_cancelled() => {
                self.set_state(WorkerState::Cancelled);
                Ok(Outcome::Cancelled)
            }
            // Continue-mode guards never match: the fault is logged in place and
            // falls through to the propagating arm below.
            Ok(Err(e)) if observe_and_continue(|| self.fatal(&Fault::Error(&e))) => {
                unreachable!()
            }
            Ok(Err(e)) => Err(e),
            Err(payload)
                if observe_and_continue(|| {
                    self.fatal(&Fault::Panic(&panic_message(&*payload)))
                }) =>
            {
                unreachable!()
            }
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }

    /// The loop itself; cancellation surfaces as `Err(TaskError::Canceled)` or
    /// `Ok(Outcome::Cancelled)`.
    async fn drive(&self, token: &CancellationToken) -> Result<Outcome, TaskError> {
        let limit = self.cfg.iteration_limit();
        let mut iteration: u64 = 0;

        loop {
            if token.is_cancelled() {
                return Ok(Outcome::Cancelled);
            }
            if limit.is_some_and(|max| iteration >= max) {
                return Ok(Outcome::Completed);
            }

            iteration += 1;
            self.iterations.store(iteration, Ordering::Release);
            self.logger.info(self.name(), iteration, SystemTime::now());

            self.work
                .tick(Tick {
                    iteration,
                    token: token.clone(),
                })
                .await?;

            if limit == Some(iteration) {
                continue;
            }
            self.pacer.pause(self.cfg.interval, token).await?;
        }
    }

    fn fatal(&self, fault: &Fault<'_>) {
        self.set_state(WorkerState::Faulted);
        self.logger.critical(self.name(), fault);
    }

    fn set_state(&self, state: WorkerState) {
        self.state.store(state as u8, Ordering::Release);
    }
}
