pub mod chat_client;
pub mod image_client;

use async_trait::async_trait;

use crate::{
    config::StudioConfig,
    error::{Result, StudioError},
    models::GenerationCall,
};

pub use chat_client::ChatClient;
pub use image_client::ImageClient;

/// The external image collaborator boundary. One call is one atomic batch:
/// either every requested image comes back or the call fails as a whole.
/// Implementations never retry.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns the encoded (base64) payloads, one per requested image.
    async fn generate(&self, call: &GenerationCall) -> Result<Vec<String>>;
}

/// Entry point to the hosted API: owns the HTTP client and credential and
/// hands out the per-capability sub-clients.
#[derive(Clone, Debug)]
pub struct StudioClient {
    image_client: ImageClient,
    chat_client: ChatClient,
}

impl StudioClient {
    pub fn new(config: StudioConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                StudioError::Credential("no API key configured; set STUDIO_API_KEY".into())
            })?;

        let http = reqwest::Client::new();
        let base_url = config.base_url_or_default();
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            image_client: ImageClient::new(
                http.clone(),
                base_url.clone(),
                api_key.clone(),
                config.image_model_or_default(),
            ),
            chat_client: ChatClient::new(http, base_url, api_key, config.chat_model_or_default()),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_credential_error() {
        let err = StudioClient::new(StudioConfig::new()).unwrap_err();
        assert!(matches!(err, StudioError::Credential(_)));
    }

    #[test]
    fn blank_api_key_is_a_credential_error() {
        let config = StudioConfig::new().with_api_key("   ");
        assert!(matches!(
            StudioClient::new(config),
            Err(StudioError::Credential(_))
        ));
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let config = StudioConfig::new()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:9000/v1/");
        let client = StudioClient::new(config).unwrap();
        assert_eq!(client.image().base_url(), "http://localhost:9000/v1");
    }
}
