use std::future::Future;

use crate::application::services::scheduler::Scheduler;
use crate::presentation::cli::commands::status::print_status;

/// Run the scheduler until Ctrl+C, then print the final status table.
///
/// # Errors
///
/// Returns an error if the status projection fails at shutdown.
pub async fn run_daemon(scheduler: &Scheduler) -> anyhow::Result<()> {
    run_daemon_until(scheduler, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl+C: {e}");
        }
    })
    .await
}

/// Same as [`run_daemon`] with a caller-supplied shutdown signal.
///
/// # Errors
///
/// Returns an error if the status projection fails at shutdown.
pub async fn run_daemon_until<F>(scheduler: &Scheduler, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let targets = scheduler.service().list_targets()?;
    tracing::info!(
        targets = targets.len(),
        interval_secs = scheduler.interval().as_secs(),
        "Daemon started"
    );
    if targets.is_empty() {
        tracing::warn!("No targets configured; add [[targets]] entries to the config file");
    }

    scheduler.start();
    shutdown.await;
    tracing::info!("Shutdown signal received");
    scheduler.stop();

    println!("\nStopping pulsewatch...");
    print_status(&scheduler.service().latest_statuses()?, None);
    Ok(())
}
