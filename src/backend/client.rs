use super::types::GeneratePayload;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, payload: &GeneratePayload) -> Result<serde_json::Value>;
}

/// Client for an Ollama-compatible generate endpoint. One POST per
/// request, no retries; by default no timeout either, since generations
/// are expected to run long.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;
        let base_url = config.address.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl GenerateBackend for OllamaClient {
    async fn generate(&self, payload: &GeneratePayload) -> Result<serde_json::Value> {
        debug!(
            "Forwarding generate request for model {} to {}",
            payload.model, self.base_url
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::backend(status.as_u16(), body));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::transport(format!("Invalid backend response body: {e}")))?;

        debug!("Backend responded with status {}", status);

        Ok(body)
    }
}
