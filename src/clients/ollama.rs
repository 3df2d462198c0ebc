//! Ollama text-extraction client.
//!
//! One request at a time against a local, unauthenticated endpoint. The
//! service gives no correctness guarantees; callers own response parsing and
//! decide how to degrade when it is unreachable.

use serde_json::json;
use tokio::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ServiceUnavailable;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ollama_base_url.clone(),
            model: config.ollama_model.clone(),
            temperature: config.ollama_temperature,
        }
    }

    /// Probe the service root. Used once at startup to gate the run.
    pub async fn health_check(&self) -> bool {
        self.http
            .get(&self.base_url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
            .is_ok()
    }

    /// Single prompt/response round trip, non-streaming, low temperature for
    /// near-deterministic extraction.
    pub async fn generate(&self, prompt: &str) -> Result<String, ServiceUnavailable> {
        debug!("Calling {} ({} chars of prompt)", self.model, prompt.len());

        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": self.temperature },
        });

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Ollama request failed: {}", e);
                ServiceUnavailable(e)
            })?;

        let value: serde_json::Value = response.json().await.map_err(ServiceUnavailable)?;
        let text = value
            .get("response")
            .and_then(|r| r.as_str())
            .unwrap_or_default()
            .trim()
            .to_string();

        debug!("Ollama responded with {} chars", text.len());

        Ok(text)
    }
}
