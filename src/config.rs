use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-mini";

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub image_model: Option<String>,
    pub chat_model: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            api_key: None,
            base_url: None,
            image_model: None,
            chat_model: None,
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("STUDIO_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok();
        let base_url = env::var("STUDIO_BASE_URL").ok();
        let image_model = env::var("STUDIO_IMAGE_MODEL").ok();
        let chat_model = env::var("STUDIO_CHAT_MODEL").ok();

        StudioConfig {
            api_key,
            base_url,
            image_model,
            chat_model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = Some(model.into());
        self
    }

    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = Some(model.into());
        self
    }

    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn image_model_or_default(&self) -> String {
        self.image_model
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string())
    }

    pub fn chat_model_or_default(&self) -> String {
        self.chat_model
            .clone()
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = StudioConfig::new();
        assert_eq!(config.base_url_or_default(), DEFAULT_BASE_URL);
        assert_eq!(config.image_model_or_default(), DEFAULT_IMAGE_MODEL);
        assert_eq!(config.chat_model_or_default(), DEFAULT_CHAT_MODEL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn builders_override_defaults() {
        let config = StudioConfig::new()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:9000/v1")
            .with_image_model("gpt-image-1")
            .with_chat_model("gpt-4o");

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.base_url_or_default(), "http://localhost:9000/v1");
        assert_eq!(config.chat_model_or_default(), "gpt-4o");
    }
}
