use serde_json::json;

use crate::{
    error::{Result, StudioError},
    models::{ApiErrorBody, ChatApiResponse, ChatMessage, Role},
};

#[derive(Clone, Debug)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One completion turn: the role's system prompt, the transcript so
    /// far, then the new user text. Returns the assistant's reply.
    pub async fn complete(
        &self,
        role: Role,
        transcript: &[ChatMessage],
        user_text: &str,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(transcript.len() + 2);
        messages.push(ChatMessage::system(role.system_prompt()));
        messages.extend(transcript.iter().cloned());
        messages.push(ChatMessage::user(user_text));

        let payload = json!({
            "model": self.model,
            "messages": messages,
        });

        log::info!("Requesting chat completion as {} with model: {}", role.label(), self.model);
        log::debug!("Chat completion request payload: {}", payload);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
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
            log::error!("Chat completion failed with HTTP {}: {}", status, cause);
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(StudioError::Credential(cause));
            }
            return Err(StudioError::Generation(format!("HTTP {status}: {cause}")));
        }

        let parsed: ChatApiResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Response(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| StudioError::Response("completion had no choices".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: String) -> ChatClient {
        ChatClient::new(
            reqwest::Client::new(),
            base_url,
            "sk-test".to_string(),
            "gpt-4.1-mini".to_string(),
        )
    }

    #[tokio::test]
    async fn system_prompt_leads_the_message_list() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4.1-mini",
                "messages": [
                    {"role": "system", "content": Role::VideoDirector.system_prompt()},
                    {"role": "user", "content": "How can I shoot a dream sequence?"},
                ],
            })))
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"Diffuse the key light."}}]}"#,
            )
            .create_async()
            .await;

        let reply = client(server.url())
            .complete(Role::VideoDirector, &[], "How can I shoot a dream sequence?")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "Diffuse the key light.");
    }

    #[tokio::test]
    async fn empty_choices_is_a_response_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client(server.url())
            .complete(Role::DanceCoach, &[], "warm-up ideas?")
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::Response(_)));
    }
}
