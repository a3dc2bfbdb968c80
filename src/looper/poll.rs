use std::sync::Arc;

use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Period of the loop boundary check.
pub const BOUNDARY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State that can be polled for loop boundaries.
pub trait BoundaryCheck {
    /// Runs one check. Returns false once there is no loop left to watch.
    fn check_boundary(&mut self) -> bool;
}

/// Recurring boundary-check task. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct BoundaryPoll {
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl BoundaryPoll {
    pub fn spawn<S>(target: Arc<Mutex<S>>, period: Duration) -> Self
    where
        S: BoundaryCheck + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let mut guard = target.lock().await;
                        // The canceller may have held the lock while we waited for it.
                        if token.is_cancelled() || !guard.check_boundary() {
                            break;
                        }
                    }
                    _ = token.cancelled() => break,
                }
            }
            log_debug!("boundary poll stopped");
        });

        Self {
            cancel_token,
            handle,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for BoundaryPoll {
    fn drop(&mut self) {
        self.cancel_token.cancel();
        self.handle.abort();
    }
}
