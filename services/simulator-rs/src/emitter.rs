use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::reading::ReadingSource;
use crate::transport::Publisher;

/// The generate-and-send loop. Warm-up once, then one cycle every interval,
/// forever. Transport failures are logged and swallowed; nothing stops it.
pub struct Emitter<S, P> {
    source: S,
    publisher: P,
    warmup: Duration,
    interval: Duration,
}

impl<S: ReadingSource, P: Publisher> Emitter<S, P> {
    pub fn new(source: S, publisher: P, config: &Config) -> Self {
        Self {
            source,
            publisher,
            warmup: Duration::from_secs(config.warmup_secs),
            interval: Duration::from_secs(config.interval_secs),
        }
    }

    pub async fn run(mut self) {
        info!("waiting {:?} for the collector to come up", self.warmup);
        sleep(self.warmup).await;
        loop {
            self.cycle().await;
            sleep(self.interval).await;
        }
    }

    async fn cycle(&mut self) {
        let reading = self.source.next_reading();
        let payload = serde_json::to_string(&reading).unwrap_or_default();
        match self.publisher.publish(&reading).await {
            Ok(status) => info!("sent: {} | status: {}", payload, status),
            Err(e) => warn!("connection error: {}", e),
        }
    }
}
