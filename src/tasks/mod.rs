//! # Units of work executed by a worker.
//!
//! This module provides:
//! - [`Work`] - trait for one iteration's worth of work
//! - [`WorkFn`] - closure-backed implementation
//! - [`Idle`] - no-op work (the worker still logs each iteration)
//! - [`Tick`] - per-iteration context handed to the work

mod work;
mod work_fn;

pub use work::{BoxWorkFuture, Idle, Tick, Work, WorkRef};
pub use work_fn::WorkFn;
