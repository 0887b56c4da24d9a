use std::time::Duration;

use dotenvy::dotenv;
use reqwest::Client;
use tracing::info;

use eco_simulator::config::Config;
use eco_simulator::emitter::Emitter;
use eco_simulator::reading::RandomReadings;
use eco_simulator::transport::HttpPublisher;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load();

    let client = Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .unwrap();

    info!("Simulator up – posting to {}", config.endpoint);
    let publisher = HttpPublisher::new(client, config.endpoint.clone());
    Emitter::new(RandomReadings, publisher, &config).run().await;
}
