//! Runtime core: the supervised worker and its host.
//!
//! The public API from this module is [`SupervisedWorker`] (with its builder),
//! [`Host`], and the collaborator traits a worker depends on.
//!
//! Internal modules:
//! - [`worker`]: the periodic loop, fault observation and guaranteed shutdown;
//! - [`builder`]: assembles a worker from its collaborators;
//! - [`pacer`]: interruptible wait between iterations;
//! - [`lifetime`]: idempotent shutdown controller and its drop guard;
//! - [`host`]: runs workers, waits within a grace period, reports the first fault;
//! - [`shutdown`]: cross-platform OS signal handling.

mod builder;
mod host;
mod lifetime;
mod pacer;
mod shutdown;
mod worker;

pub use builder::WorkerBuilder;
pub use host::Host;
pub use lifetime::{AppLifetime, Lifetime};
pub use pacer::{Pacer, TokioPacer};
pub use shutdown::wait_for_shutdown_signal;
pub use worker::{Outcome, SupervisedWorker, WorkerState};
