//! # Example: silent_failure
//!
//! A heartbeat worker that fails on its 5th iteration. Without supervision the
//! spawned loop would stop quietly and the process would keep running; here the
//! fault is logged where it happens and the host shuts down with an error.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Host::new(HostConfig)
//!   ├─► SupervisedWorker "heartbeat" (1s interval)
//!   │     ├─► iteration 1..4: INFO worker running
//!   │     └─► iteration 5:    Err("disk full")
//!   │            ├─► ERROR fatal error
//!   │            └─► request_shutdown
//!   └─► Host::run returns RuntimeError::WorkerFaulted → exit code 1
//! ```
//!
//! Press Ctrl-C before the 5th iteration to see a clean, silent cancellation.
//!
//! ## Run
//! ```bash
//! cargo run --example silent_failure
//! ```

use std::time::Duration;

use taskwarden::{Host, HostConfig, SupervisedWorker, TaskError, Tick, WorkFn, WorkerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = Host::new(HostConfig {
        grace: Duration::from_secs(5),
    });

    let cfg = WorkerConfig {
        interval: Duration::from_secs(1),
        ..WorkerConfig::named("heartbeat")
    };
    let worker = SupervisedWorker::builder(cfg, host.lifetime())
        .with_work(WorkFn::arc(|tick: Tick| async move {
            if tick.iteration == 5 {
                return Err(TaskError::fail("disk full"));
            }
            Ok(())
        }))
        .build();

    host.run(vec![worker]).await?;
    Ok(())
}
