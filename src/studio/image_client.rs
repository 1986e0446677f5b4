use async_trait::async_trait;
use serde_json::json;

use crate::{
    error::{Result, StudioError},
    models::{ApiErrorBody, GenerationCall, ImageApiResponse},
    studio::ImageGenerator,
};

#[derive(Clone, Debug)]
pub struct ImageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, call: &GenerationCall) -> Result<Vec<String>> {
        let mut payload = json!({
            "model": self.model,
            "prompt": call.prompt,
            "size": call.size.as_str(),
            "n": call.count,
            "quality": call.quality.as_str(),
            "background": call.background.as_str(),
        });
        if let Some(seed) = call.seed {
            payload["seed"] = json!(seed);
        }

        log::info!("Generating {} image(s) with model: {}", call.count, self.model);
        log::debug!("Image generation request payload: {}", payload);

        let response = self
            .http
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StudioError::Generation(format!("network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let cause = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            log::error!("Image generation failed with HTTP {}: {}", status, cause);
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(StudioError::Credential(cause));
            }
            return Err(StudioError::Generation(format!("HTTP {status}: {cause}")));
        }

        let parsed: ImageApiResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Response(e.to_string()))?;

        if parsed.data.is_empty() {
            return Err(StudioError::Generation("no images generated".into()));
        }
        if parsed.data.len() != call.count as usize {
            return Err(StudioError::Generation(format!(
                "provider returned {} of {} requested images",
                parsed.data.len(),
                call.count
            )));
        }

        Ok(parsed.data.into_iter().map(|d| d.b64_json).collect())
    }
}
