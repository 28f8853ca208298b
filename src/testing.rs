//! Test doubles shared by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::{Lifetime, Pacer, TokioPacer};
use crate::error::TaskError;
use crate::logging::{Fault, Logger};

/// One observation recorded by [`Probe`], in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
    Info {
        iteration: u64,
    },
    Critical {
        label: &'static str,
        message: String,
        /// Address of the boxed error, when the fault is a `TaskError::Fail`.
        addr: Option<usize>,
    },
    Shutdown,
}

/// Records log entries and shutdown requests on a single timeline.
#[derive(Default)]
pub(crate) struct Probe {
    marks: Mutex<Vec<Mark>>,
}

impl Probe {
    pub(crate) fn marks(&self) -> Vec<Mark> {
        self.marks.lock().unwrap().clone()
    }

    pub(crate) fn infos(&self) -> usize {
        self.count(|m| matches!(m, Mark::Info { .. }))
    }

    pub(crate) fn criticals(&self) -> Vec<Mark> {
        self.marks()
            .into_iter()
            .filter(|m| matches!(m, Mark::Critical { .. }))
            .collect()
    }

    pub(crate) fn shutdowns(&self) -> usize {
        self.count(|m| matches!(m, Mark::Shutdown))
    }

    fn count(&self, f: impl Fn(&Mark) -> bool) -> usize {
        self.marks.lock().unwrap().iter().filter(|m| f(m)).count()
    }

    fn push(&self, mark: Mark) {
        self.marks.lock().unwrap().push(mark);
    }
}

impl Logger for Probe {
    fn info(&self, _worker: &str, iteration: u64, _at: SystemTime) {
        self.push(Mark::Info { iteration });
    }

    fn critical(&self, _worker: &str, fault: &Fault<'_>) {
        self.push(Mark::Critical {
            label: fault.as_label(),
            message: fault.to_string(),
            addr: fault.as_error().and_then(error_addr),
        });
    }
}

impl Lifetime for Probe {
    fn request_shutdown(&self) {
        self.push(Mark::Shutdown);
    }
}

/// Address of the boxed error inside `TaskError::Fail`.
pub(crate) fn error_addr(err: &TaskError) -> Option<usize> {
    match err {
        TaskError::Fail { error } => {
            Some(&**error as *const (dyn std::error::Error + Send + Sync) as *const () as usize)
        }
        _ => None,
    }
}

/// Logger whose critical entry panics.
pub(crate) struct PanickingLogger;

impl Logger for PanickingLogger {
    fn info(&self, _worker: &str, _iteration: u64, _at: SystemTime) {}

    fn critical(&self, _worker: &str, _fault: &Fault<'_>) {
        panic!("logger exploded");
    }
}

/// Pacer that fails on the `fail_on`-th call (1-based) and otherwise sleeps.
pub(crate) struct FailingPacer {
    fail_on: usize,
    calls: AtomicUsize,
}

impl FailingPacer {
    pub(crate) fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Pacer for FailingPacer {
    async fn pause(&self, delay: Duration, token: &CancellationToken) -> Result<(), TaskError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if call == self.fail_on {
            return Err(TaskError::fail("timer wheel broken"));
        }
        TokioPacer.pause(delay, token).await
    }
}
