//! HTTP client for the automation service.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use autoapply_protocols::error::AutomationError;

/// Thin JSON client bound to one automation service base URL.
#[derive(Debug, Clone)]
pub struct AutomationClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl AutomationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AutomationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AutomationError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            client,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, AutomationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AutomationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Automation service returned {} for {}", status, url);
            return Err(match error_message(&text) {
                Some(message) => AutomationError::Api {
                    status: status.as_u16(),
                    message,
                },
                None => AutomationError::Opaque,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| AutomationError::InvalidResponse(e.to_string()))
    }
}

/// Prefer the `error` (then `message`) field of a JSON body; fall back to the raw text.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["error", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.trim().is_empty() {
                    return Some(text.clone());
                }
            }
        }
    }

    Some(trimmed.to_string())
}
