//! # OS termination signals.
//!
//! The host races [`signal_or_pending`] against its lifetime: whichever comes
//! first starts the shutdown sequence.
//!
//! Unix listens for `SIGINT`, `SIGTERM` and `SIGQUIT`; other platforms for Ctrl-C.

/// Completes on the first termination signal.
///
/// Fails only if a signal handler cannot be installed.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    let received = tokio::select! {
        _ = sigint.recv()  => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
        _ = sigquit.recv() => "SIGQUIT",
    };
    tracing::info!(target: "taskwarden", signal = received, "termination signal received");
    Ok(())
}

/// Completes on the first termination signal.
///
/// Fails only if the Ctrl-C handler cannot be installed.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!(target: "taskwarden", signal = "ctrl-c", "termination signal received");
    Ok(())
}

/// Like [`wait_for_shutdown_signal`], but never completes when handlers cannot
/// be installed; the host then stops through its lifetime only.
pub(crate) async fn signal_or_pending() {
    if let Err(err) = wait_for_shutdown_signal().await {
        tracing::warn!(target: "taskwarden", error = %err, "signal registration failed");
        std::future::pending::<()>().await;
    }
}
