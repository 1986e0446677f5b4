//! Per-user session state and the submit flows that tie validation, prompt
//! composition, the external collaborator, and the histories together.
//!
//! One session is one user: state is never shared across sessions and all
//! mutation happens on the calling task, so no locking is involved.

use uuid::Uuid;

use crate::{
    error::{Result, StudioError},
    history::{ChatHistory, GenerationHistoryStore},
    models::{
        ChatMessage, GenerationCall, GenerationParams, GenerationResult, ImageSize, Quality, Role,
        StylePreset,
    },
    prompt,
    studio::{ChatClient, ImageGenerator},
};

/// Raw form input for one image submission, as the presentation layer
/// hands it over. The seed arrives as text on purpose: anything that does
/// not parse falls back to provider-random with a warning rather than
/// failing the submit.
#[derive(Debug, Clone)]
pub struct GenerationSubmit {
    pub prompt: String,
    pub negative_prompt: String,
    pub style: StylePreset,
    pub size: ImageSize,
    pub variation_count: u8,
    pub seed_text: String,
    pub transparent_background: bool,
    pub quality: Quality,
}

/// All mutable state for one user's session: the selected role, the
/// generation history, and the chat transcript. Created empty at session
/// start, cleared only explicitly, dropped at session end.
pub struct Session {
    id: Uuid,
    role: Role,
    generations: GenerationHistoryStore,
    chat: ChatHistory,
}

impl Session {
    pub fn new(role: Role) -> Self {
        let id = Uuid::new_v4();
        log::info!("Starting session {} as {}", id, role.label());
        Self {
            id,
            role,
            generations: GenerationHistoryStore::new(),
            chat: ChatHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Switching roles affects future submissions only; history keeps the
    /// role each entry was generated with.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn history(&self) -> &GenerationHistoryStore {
        &self.generations
    }

    pub fn chat_history(&self) -> &ChatHistory {
        &self.chat
    }

    pub fn clear_history(&mut self) {
        self.generations.clear();
    }

    pub fn clear_chat(&mut self) {
        self.chat.clear();
    }

    /// One submit action: validate, compose, call the collaborator once,
    /// decode the batch, record the result at the head of the history.
    ///
    /// The history is updated fully or not at all: any failure, from
    /// validation through payload decoding, leaves it untouched. On success
    /// the new entry is `history().latest()`.
    pub async fn submit_generation<G: ImageGenerator>(
        &mut self,
        backend: &G,
        submit: GenerationSubmit,
    ) -> Result<()> {
        let base_text = submit.prompt.trim();
        if base_text.is_empty() {
            return Err(StudioError::Validation("please enter a prompt".into()));
        }

        let seed = parse_seed(&submit.seed_text);
        let params = GenerationParams::new(
            base_text,
            submit.negative_prompt.trim(),
            submit.style,
            self.role,
            submit.size,
            submit.variation_count,
            seed,
            submit.transparent_background,
            submit.quality,
        );

        let final_prompt = prompt::compose(
            params.role,
            &params.prompt,
            params.style,
            &params.negative_prompt,
        );
        log::debug!("Composed prompt: {}", final_prompt);

        let call = GenerationCall {
            prompt: final_prompt,
            size: params.size,
            count: params.variation_count,
            quality: params.quality,
            background: params.background(),
            seed: params.seed,
        };

        let payloads = backend.generate(&call).await?;

        let mut images = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            images.push(crate::encoding::decode(payload)?);
        }

        log::info!(
            "Recorded generation of {} image(s) in session {}",
            images.len(),
            self.id
        );
        self.generations
            .insert_at_head(GenerationResult::new(params, images));
        Ok(())
    }

    /// One chat turn with the session's current role. The transcript gains
    /// the user and assistant messages only after the call succeeds.
    pub async fn submit_chat(&mut self, client: &ChatClient, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StudioError::Validation(
                "please enter your question first".into(),
            ));
        }

        let reply = client.complete(self.role, self.chat.messages(), text).await?;

        self.chat.push(ChatMessage::user(text));
        self.chat.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }
}

/// Permissive seed parsing: empty means provider-random, and so does
/// anything non-numeric, with a warning rather than a hard failure.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!(
                "Seed '{}' is not a whole number; letting the provider randomize",
                trimmed
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Backend double that records calls and replies with a fixed batch.
    struct FixedBackend {
        calls: AtomicUsize,
        last_call: Mutex<Option<GenerationCall>>,
        payloads: Vec<String>,
    }

    impl FixedBackend {
        fn returning(images: &[&[u8]]) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
                payloads: images.iter().map(|bytes| encoding::encode(bytes)).collect(),
            }
        }

        fn raw(payloads: Vec<String>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
                payloads,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageGenerator for FixedBackend {
        async fn generate(&self, call: &GenerationCall) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() = Some(call.clone());
            Ok(self.payloads.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ImageGenerator for FailingBackend {
        async fn generate(&self, _call: &GenerationCall) -> Result<Vec<String>> {
            Err(StudioError::Generation(
                "network error: connection refused".into(),
            ))
        }
    }

    fn submit(prompt: &str) -> GenerationSubmit {
        GenerationSubmit {
            prompt: prompt.to_string(),
            negative_prompt: String::new(),
            style: StylePreset::Cinematic,
            size: ImageSize::Square1024,
            variation_count: 2,
            seed_text: String::new(),
            transparent_background: false,
            quality: Quality::Standard,
        }
    }

    #[tokio::test]
    async fn empty_prompt_never_reaches_the_backend() {
        let backend = FixedBackend::returning(&[b"png".as_slice()]);
        let mut session = Session::new(Role::VideoDirector);

        let err = session
            .submit_generation(&backend, submit("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, StudioError::Validation(_)));
        assert_eq!(backend.calls(), 0);
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn backend_failure_leaves_history_untouched() {
        let mut session = Session::new(Role::VideoDirector);

        let err = session
            .submit_generation(&FailingBackend, submit("sunset over mountains"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn successful_submit_records_decoded_images_at_head() {
        let backend = FixedBackend::returning(&[b"first image".as_slice(), b"second image".as_slice()]);
        let mut session = Session::new(Role::VideoDirector);

        session
            .submit_generation(&backend, submit("sunset over mountains"))
            .await
            .unwrap();

        assert_eq!(session.history().len(), 1);
        let latest = session.history().latest().unwrap();
        assert_eq!(latest.params.prompt, "sunset over mountains");
        assert_eq!(latest.params.role, Role::VideoDirector);
        assert_eq!(latest.images, vec![b"first image".to_vec(), b"second image".to_vec()]);

        let call = backend.last_call.lock().unwrap().clone().unwrap();
        assert!(call.prompt.starts_with("sunset over mountains, cinematic lighting"));
        assert_eq!(call.count, 2);
        assert_eq!(call.seed, None);
    }

    #[tokio::test]
    async fn malformed_payload_aborts_the_whole_result() {
        let backend = FixedBackend::raw(vec![
            encoding::encode(b"good"),
            "!!not-base64!!".to_string(),
        ]);
        let mut session = Session::new(Role::GraphicDesigner);

        let err = session
            .submit_generation(&backend, submit("poster concept"))
            .await
            .unwrap_err();

        assert!(matches!(err, StudioError::Decode(_)));
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn invalid_seed_text_falls_back_to_random() {
        let backend = FixedBackend::returning(&[b"img".as_slice(), b"img".as_slice()]);
        let mut session = Session::new(Role::DanceCoach);

        let mut request = submit("dancer mid-leap");
        request.seed_text = "lucky".to_string();
        session.submit_generation(&backend, request).await.unwrap();

        let call = backend.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.seed, None);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn numeric_seed_is_forwarded() {
        let backend = FixedBackend::returning(&[b"img".as_slice(), b"img".as_slice()]);
        let mut session = Session::new(Role::DanceCoach);

        let mut request = submit("dancer mid-leap");
        request.seed_text = " 1234 ".to_string();
        session.submit_generation(&backend, request).await.unwrap();

        let call = backend.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.seed, Some(1234));
    }

    #[tokio::test]
    async fn repeated_submits_stack_newest_first() {
        let backend = FixedBackend::returning(&[b"img".as_slice(), b"img".as_slice()]);
        let mut session = Session::new(Role::StoryboardArtist);

        session
            .submit_generation(&backend, submit("opening frame"))
            .await
            .unwrap();
        session
            .submit_generation(&backend, submit("closing frame"))
            .await
            .unwrap();

        let prompts: Vec<&str> = session
            .history()
            .iter()
            .map(|r| r.params.prompt.as_str())
            .collect();
        assert_eq!(prompts, vec!["closing frame", "opening frame"]);
    }

    #[test]
    fn seed_parsing_is_permissive() {
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("   "), None);
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 7 "), Some(7));
        assert_eq!(parse_seed("-3"), None);
        assert_eq!(parse_seed("4.5"), None);
        assert_eq!(parse_seed("random"), None);
    }

    #[tokio::test]
    async fn empty_chat_text_is_rejected_locally() {
        let mut session = Session::new(Role::PerformingArtsCritic);
        let client = ChatClient::new(
            reqwest::Client::new(),
            "http://localhost:1".to_string(),
            "sk-test".to_string(),
            "gpt-4.1-mini".to_string(),
        );

        let err = session.submit_chat(&client, "  ").await.unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)));
        assert!(session.chat_history().is_empty());
    }
}
