//! # taskwarden
//!
//! **taskwarden** runs long-lived, cancellable background workers that can not
//! fail silently.
//!
//! A background loop that returns an error (or panics) inside a spawned task
//! usually just stops: the error sits in a `JoinHandle` nobody awaits, nothing is
//! logged, and the process keeps running without the work it exists for.
//! taskwarden closes that gap with two guarantees:
//!
//! 1. every fault is logged **once**, at the point of failure, before it
//!    propagates;
//! 2. every worker exit (cancelled, completed or faulted) **requests host
//!    shutdown**.
//!
//! ## Architecture
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   │  Host                                                           │
//!   │  - AppLifetime (stopping token + idempotent request_shutdown)   │
//!   │  - OS signals ──► request_shutdown                              │
//!   │  - JoinSet of workers, grace period on shutdown                 │
//!   └──────┬───────────────────────────────────────────┬──────────────┘
//!          ▼ token                                      ▲ request_shutdown
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   │  SupervisedWorker::run(token)                                   │
//!   │                                                                 │
//!   │  ShutdownGuard ───────────────────────── drop ──────────────────┤
//!   │  loop {                                                         │
//!   │    ├─► token cancelled?         ─► Ok(Cancelled)                │
//!   │    ├─► iteration limit reached? ─► Ok(Completed)                │
//!   │    ├─► Logger::info(worker, iteration, now)                     │
//!   │    ├─► Work::tick(Tick)         ─► Err(e) / panic ──┐           │
//!   │    └─► Pacer::pause(interval)   ─► Err(e) / panic ──┤           │
//!   │  }                                                  ▼           │
//!   │     observe_and_continue(|| Logger::critical(&e)) ─► Err(e)     │
//!   └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                          |
//! |-------------------|----------------------------------------------------------|---------------------------------------------|
//! | **Worker**        | Periodic loop with fault logging and guaranteed shutdown | [`SupervisedWorker`], [`Outcome`]           |
//! | **Observer**      | Log-then-propagate `match` guards                        | [`observer::observe_and_continue`]          |
//! | **Collaborators** | Pluggable work, wait, log sink and shutdown controller   | [`Work`], [`Pacer`], [`Logger`], [`Lifetime`] |
//! | **Hosting**       | Runs workers, OS signals, grace period                   | [`Host`], [`AppLifetime`]                   |
//! | **Errors**        | Typed errors for work and host                           | [`TaskError`], [`RuntimeError`]             |
//! | **Configuration** | Worker and host settings                                 | [`WorkerConfig`], [`HostConfig`]            |
//!
//! ## Example
//! ```rust,no_run
//! use taskwarden::{Host, HostConfig, SupervisedWorker, TaskError, Tick, WorkFn, WorkerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let host = Host::new(HostConfig::default());
//!
//!     let worker = SupervisedWorker::builder(WorkerConfig::named("heartbeat"), host.lifetime())
//!         .with_work(WorkFn::arc(|tick: Tick| async move {
//!             if tick.iteration == 5 {
//!                 return Err(TaskError::fail("disk full"));
//!             }
//!             Ok(())
//!         }))
//!         .build();
//!
//!     // Logs "fatal error" for the 5th iteration, then shuts the host down.
//!     host.run(vec![worker]).await?;
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod logging;
mod tasks;

pub mod observer;

#[cfg(test)]
pub(crate) mod testing;

// ---- Public re-exports ----

pub use crate::config::{HostConfig, WorkerConfig};
pub use crate::core::{
    AppLifetime, Host, Lifetime, Outcome, Pacer, SupervisedWorker, TokioPacer, WorkerBuilder,
    WorkerState, wait_for_shutdown_signal,
};
pub use crate::error::{BoxError, RuntimeError, TaskError};
pub use crate::logging::{Fault, Logger, TracingLogger};
pub use crate::tasks::{BoxWorkFuture, Idle, Tick, Work, WorkFn, WorkRef};
