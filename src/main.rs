use rolestudio::{
    GenerationSubmit, ImageSize, Quality, Role, Session, StudioClient, StudioConfig, StylePreset,
};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    rolestudio::logger::init_with_config(
        rolestudio::logger::LoggerConfig::development()
            .with_level(rolestudio::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking studio environment...");
    let config = StudioConfig::from_env();
    match &config.api_key {
        Some(key) => {
            log::info!("✅ API key found in environment");
            log::debug!("Key starts with: {}...", &key[..5.min(key.len())]);
        }
        None => {
            log::error!("❌ No STUDIO_API_KEY or OPENAI_API_KEY set");
            log::warn!("💡 Requests will fail until a key is configured");
        }
    }
    log::info!("🌐 Base URL: {}", config.base_url_or_default());
    log::info!("🤖 Image model: {}", config.image_model_or_default());
    log::info!("🤖 Chat model: {}", config.chat_model_or_default());

    let client = StudioClient::new(config)?;

    log::info!("🎭 Available roles:");
    for role in Role::all() {
        log::info!("  {} - {}", role.label(), role.description());
    }
    log::info!("🎨 Available style presets:");
    for style in StylePreset::all() {
        log::info!("  {} - {}", style.label(), style.hint());
    }

    let mut session = Session::new(Role::VideoDirector);

    // Test 1: chat assistant
    log::info!("💬 Testing chat assistant...");
    let question = "How can I shoot a dream sequence on a small budget?";
    let chat_timer = rolestudio::logger::timer("chat completion");
    match session.submit_chat(client.chat(), question).await {
        Ok(reply) => {
            log::info!("✅ Chat completion successful!");
            log::info!("📝 Assistant: {}", reply);
            log::info!("💭 Transcript length: {} messages", session.chat_history().len());
        }
        Err(e) => {
            log::error!("❌ Chat completion failed: {}", e);
        }
    }
    chat_timer.stop();

    // Test 2: image generation
    log::info!("🎨 Testing image generation...");
    let request = GenerationSubmit {
        prompt: "sunset over mountains, a lone hiker on the ridge".to_string(),
        negative_prompt: "blurry, text artifacts".to_string(),
        style: StylePreset::Cinematic,
        size: ImageSize::Square1024,
        variation_count: 2,
        seed_text: String::new(),
        transparent_background: false,
        quality: Quality::Standard,
    };

    let image_timer = rolestudio::logger::timer("image generation");
    match session.submit_generation(client.image(), request).await {
        Ok(()) => {
            log::info!("✅ Image generation successful!");
            if let Some(latest) = session.history().latest() {
                log::info!("🖼️  Received {} image(s)", latest.images.len());
                for (index, bytes) in latest.images.iter().enumerate() {
                    let filename = latest.suggested_filename(index);
                    match fs::write(&filename, bytes) {
                        Ok(_) => log::info!("💾 Image saved to: {}", filename),
                        Err(e) => log::error!("❌ Failed to save image: {}", e),
                    }
                }
            }
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {}", e);
            log::warn!("💡 Check your API key, model access, and parameter combination");
        }
    }
    image_timer.stop();

    log::info!("📚 History now holds {} generation(s)", session.history().len());
    log::info!("🎉 Demo run completed!");

    Ok(())
}
