use reqwest::Client;
use thiserror::Error;

use crate::reading::Reading;

/// Anything raised while attempting the HTTP exchange. Never fatal; the
/// emitter logs it and moves on.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PublishError(pub String);

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        PublishError(format!("request error: {e}"))
    }
}

/// Outbound side of a cycle. A completed exchange yields the response status
/// code, whatever it is; only transport-level failures are errors.
pub trait Publisher {
    fn publish(
        &self,
        reading: &Reading,
    ) -> impl std::future::Future<Output = Result<u16, PublishError>> + Send;
}

/// POSTs readings as JSON to the collector endpoint.
pub struct HttpPublisher {
    client: Client,
    endpoint: String,
}

impl HttpPublisher {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

impl Publisher for HttpPublisher {
    async fn publish(&self, reading: &Reading) -> Result<u16, PublishError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(reading)
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }
}
