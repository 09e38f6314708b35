use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use application::ports::out_::AsyncTimer;

/// Spawns the periodic clock driver.
///
/// Every `step` the nominal step length is wrapped and sent to `ticks`. The
/// task ends once the receiving side is dropped.
pub fn spawn_tick_driver<T, F>(
    timer: Arc<dyn AsyncTimer>,
    step: Duration,
    ticks: mpsc::Sender<T>,
    wrap: F,
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Fn(Duration) -> T + Send + 'static,
{
    tokio::spawn(async move {
        debug!(step_ms = step.as_millis() as u64, "tick driver started");
        loop {
            timer.sleep(step).await;
            if ticks.send(wrap(step)).await.is_err() {
                break;
            }
        }
        debug!("tick driver stopped");
    })
}
