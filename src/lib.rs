pub mod config;
pub mod encoding;
pub mod error;
pub mod history;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod session;
pub mod studio;

pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use history::{ChatHistory, GenerationHistoryStore};
pub use models::{
    Background, ChatMessage, GenerationCall, GenerationParams, GenerationResult, ImageSize,
    Quality, Role, Speaker, StylePreset,
};
pub use session::{GenerationSubmit, Session};
pub use studio::{ChatClient, ImageClient, ImageGenerator, StudioClient};
