use std::sync::Arc;

use crate::{
    config::WorkerConfig,
    logging::{Logger, TracingLogger},
    tasks::{Idle, WorkRef},
};
use super::{lifetime::Lifetime, pacer::{Pacer, TokioPacer}, worker::SupervisedWorker};

/// Builder for constructing a [`SupervisedWorker`] with optional collaborators.
///
/// Defaults:
/// - work: [`Idle`]
/// - logger: [`TracingLogger`]
/// - pacer: [`TokioPacer`]
pub struct WorkerBuilder {
    cfg: WorkerConfig,
    lifetime: Arc<dyn Lifetime>,
    work: WorkRef,
    logger: Arc<dyn Logger>,
    pacer: Arc<dyn Pacer>,
}

impl WorkerBuilder {
    /// Creates a new builder with the given configuration and shutdown controller.
    pub fn new(cfg: WorkerConfig, lifetime: Arc<dyn Lifetime>) -> Self {
        Self {
            cfg,
            lifetime,
            work: Arc::new(Idle),
            logger: Arc::new(TracingLogger),
            pacer: Arc::new(TokioPacer),
        }
    }

    /// Sets the unit of work executed on every iteration.
    pub fn with_work(mut self, work: WorkRef) -> Self {
        self.work = work;
        self
    }

    /// Sets the log sink for iteration and fault entries.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Sets the interruptible wait used between iterations.
    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Builds the worker.
    pub fn build(self) -> SupervisedWorker {
        SupervisedWorker::new(self.cfg, self.work, self.logger, self.pacer, self.lifetime)
    }
}
