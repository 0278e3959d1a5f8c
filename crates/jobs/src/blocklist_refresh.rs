use palisade_dns_application::ports::{BlocklistFetcherPort, ListStorePort};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Periodically downloads and parses the blocklist feed and publishes the
/// result to the list store. The initial fetch runs synchronously
/// before the background loop starts; a failed fetch never touches the
/// existing blocklist.
pub struct BlocklistRefreshJob {
    fetcher: Arc<dyn BlocklistFetcherPort>,
    list_store: Arc<dyn ListStorePort>,
    url: String,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BlocklistRefreshJob {
    pub fn new(
        fetcher: Arc<dyn BlocklistFetcherPort>,
        list_store: Arc<dyn ListStorePort>,
        url: String,
        interval_secs: u64,
    ) -> Self {
        Self {
            fetcher,
            list_store,
            url,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Fetch once and publish on success; log and keep the current
    /// blocklist on failure.
    pub async fn run_once(&self) {
        match self.fetcher.fetch(&self.url).await {
            Ok(domains) => {
                info!(url = %self.url, count = domains.len(), "Blocklist refreshed");
                self.list_store.replace_blocklist(domains);
            }
            Err(err) => {
                error!(url = %self.url, error = %err, "Blocklist fetch failed, keeping current list");
            }
        }
    }

    /// Run the initial fetch synchronously, then spawn the periodic loop.
    /// No-op when no blocklist URL is configured.
    pub async fn start(self: Arc<Self>) {
        if self.url.is_empty() {
            warn!("No BLOCKLIST_URL configured, skipping blocklist refresh job");
            return;
        }

        self.run_once().await;

        info!(interval_secs = self.interval_secs, "Starting blocklist refresh job");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BlocklistRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once().await;
                    }
                }
            }
        });
    }
}
