//! # Worker log sink.
//!
//! The worker writes two kinds of entries through a [`Logger`]:
//! - an informational entry at the start of every iteration;
//! - exactly one critical entry when it faults, written **before** the fault
//!   leaves the worker and before shutdown is requested.
//!
//! ```text
//! SupervisedWorker ── info(worker, iteration, at) ──────► Logger
//!        │
//!        └── fault ── observe_and_continue ── critical(worker, &Fault) ──► Logger
//!                                 │
//!                                 └──► propagate the same fault
//! ```
//!
//! [`TracingLogger`] is the default sink and forwards to `tracing`.

mod logger;
mod trace;

pub use logger::{Fault, Logger};
pub use trace::TracingLogger;
