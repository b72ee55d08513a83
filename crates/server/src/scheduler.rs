use shared::{
    abstract_trait::DynReservationService, domain::requests::CheckOverdueRequest,
    errors::ServiceError,
};
use tokio::{sync::broadcast, task::JoinHandle, time};
use tracing::{error, info};

const RESTART_DELAY_SECS: u64 = 5;

/// Server-side counterpart of the browser polling timers: one task runs
/// both reservation sweeps on a fixed interval. The HTTP sweep endpoints
/// stay available, so a double fire only ever acts on disjoint rows.
pub fn spawn_sweeper(
    reservations: DynReservationService,
    interval_secs: u64,
    shutdown_tx: broadcast::Sender<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();
        let mut ticker = time::interval(time::Duration::from_secs(interval_secs.max(1)));
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        info!("🔁 Reservation sweeper running every {interval_secs}s");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = run_sweep(&reservations).await {
                        error!("❌ Reservation sweep failed: {e}. Retrying in {RESTART_DELAY_SECS}s...");
                        time::sleep(time::Duration::from_secs(RESTART_DELAY_SECS)).await;
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("🏁 Reservation sweeper stopped");
                    break;
                }
            }
        }
    })
}

async fn run_sweep(reservations: &DynReservationService) -> Result<(), ServiceError> {
    let approved = reservations.process_pending().await?;
    if approved.data.approved_count > 0 {
        info!(
            "✅ Sweep approved {} pending reservation(s)",
            approved.data.approved_count
        );
    }

    let rejected = reservations
        .check_overdue(&CheckOverdueRequest::default())
        .await?;
    if rejected.data.rejected_count > 0 {
        info!(
            "📉 Sweep auto-cancelled {} overdue reservation(s)",
            rejected.data.rejected_count
        );
    }

    Ok(())
}
