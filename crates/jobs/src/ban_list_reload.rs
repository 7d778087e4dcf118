use bypass_dns_application::ports::BanListStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Periodic staleness check of the ban list file.
///
/// This task is the only writer of the list snapshot; query handling only
/// ever reads it. An interval of zero disables the job entirely; the
/// startup load performed by the caller is then the only load.
pub struct BanListReloadJob {
    store: Arc<dyn BanListStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BanListReloadJob {
    pub fn new(store: Arc<dyn BanListStore>) -> Self {
        Self {
            store,
            interval_secs: 5,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        if self.interval_secs == 0 {
            info!("Ban list reload disabled (interval is zero)");
            return;
        }

        info!(
            interval_secs = self.interval_secs,
            "Starting ban list reload job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // The caller already did the startup load; skip the immediate tick.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BanListReloadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.store.reload().await {
                            Ok(true) => info!("BanListReloadJob: ban list refreshed"),
                            Ok(false) => debug!("BanListReloadJob: ban list unchanged"),
                            Err(e) => warn!(
                                error = %e,
                                "BanListReloadJob: reload failed, keeping previous snapshot"
                            ),
                        }
                    }
                }
            }
        });
    }
}
