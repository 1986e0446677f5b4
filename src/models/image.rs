use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Background, ImageSize, Quality, Role, StylePreset};

pub const MIN_VARIATIONS: u8 = 1;
pub const MAX_VARIATIONS: u8 = 8;

/// Everything one submit action captured from the user. Immutable once
/// constructed; a fresh value is built per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub prompt: String,
    pub negative_prompt: String,
    pub style: StylePreset,
    pub role: Role,
    pub size: ImageSize,
    pub variation_count: u8,
    pub seed: Option<u64>,
    pub transparent_background: bool,
    pub quality: Quality,
}

impl GenerationParams {
    /// Caller is responsible for having validated `prompt` as non-empty.
    /// The variation count is clamped into the supported range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        prompt: impl Into<String>,
        negative_prompt: impl Into<String>,
        style: StylePreset,
        role: Role,
        size: ImageSize,
        variation_count: u8,
        seed: Option<u64>,
        transparent_background: bool,
        quality: Quality,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: negative_prompt.into(),
            style,
            role,
            size,
            variation_count: variation_count.clamp(MIN_VARIATIONS, MAX_VARIATIONS),
            seed,
            transparent_background,
            quality,
        }
    }

    pub fn background(&self) -> Background {
        Background::from_transparent_flag(self.transparent_background)
    }
}

/// The single atomic request handed to the image collaborator: the fully
/// composed prompt plus provider parameters, nothing user-facing left in it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationCall {
    pub prompt: String,
    pub size: ImageSize,
    pub count: u8,
    pub quality: Quality,
    pub background: Background,
    pub seed: Option<u64>,
}

/// One completed generation: the params that produced it and the decoded
/// image payloads, newest entries of the history owning these by value.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub timestamp: DateTime<Utc>,
    pub params: GenerationParams,
    pub images: Vec<Vec<u8>>,
}

impl GenerationResult {
    pub fn new(params: GenerationParams, images: Vec<Vec<u8>>) -> Self {
        Self {
            timestamp: Utc::now(),
            params,
            images,
        }
    }

    /// Download name for the image at `index`, e.g. `image_1714500000_0.png`.
    pub fn suggested_filename(&self, index: usize) -> String {
        format!("image_{}_{}.png", self.timestamp.timestamp(), index)
    }
}

/// Wire shape of the provider's image endpoint response.
#[derive(Debug, Deserialize)]
pub struct ImageApiResponse {
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    pub b64_json: String,
}

/// Error body the provider returns on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
