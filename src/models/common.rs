use serde::{Deserialize, Serialize};

/// Creative persona driving both the chat system prompt and the
/// instruction clause appended to composed image prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    VideoDirector,
    FashionConsultant,
    DanceCoach,
    PerformingArtsCritic,
    GraphicDesigner,
    StoryboardArtist,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::VideoDirector,
            Role::FashionConsultant,
            Role::DanceCoach,
            Role::PerformingArtsCritic,
            Role::GraphicDesigner,
            Role::StoryboardArtist,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::VideoDirector => "Video Director",
            Role::FashionConsultant => "Fashion Consultant",
            Role::DanceCoach => "Dance Coach",
            Role::PerformingArtsCritic => "Performing Arts Critic",
            Role::GraphicDesigner => "Graphic Designer",
            Role::StoryboardArtist => "Storyboard Artist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::VideoDirector => "Analyzes mood, camera angle, and lighting.",
            Role::FashionConsultant => "Focuses on color harmony, texture, and silhouette.",
            Role::DanceCoach => "Breaks ideas down into movement, rhythm, and body lines.",
            Role::PerformingArtsCritic => "Evaluates emotional impact and stagecraft.",
            Role::GraphicDesigner => "Balances composition, typography, and color palette.",
            Role::StoryboardArtist => "Sketches composition, camera layout, and timing cues.",
        }
    }

    /// Clause appended to composed image prompts. Empty string means the
    /// role contributes nothing to the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Role::VideoDirector => {
                "clear framing, deliberate camera angle, expressive lighting as a film director would stage it"
            }
            Role::FashionConsultant => {
                "harmonious color palette, rich fabric texture, strong silhouette"
            }
            Role::DanceCoach => {
                "dynamic body lines, sense of motion and rhythm, expressive posture"
            }
            Role::PerformingArtsCritic => {
                "theatrical staging, emotional intensity, audience point of view"
            }
            Role::GraphicDesigner => {
                "balanced layout, purposeful negative space, cohesive color scheme"
            }
            Role::StoryboardArtist => {
                "storyboard panel composition, readable action beats, clear scene blocking"
            }
        }
    }

    /// System prompt used when this role answers in the chat assistant.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Role::VideoDirector => {
                "You are a professional film director. Always analyze ideas in terms of visual \
                 storytelling: camera movement, lighting, framing, editing, and emotional tone. \
                 Describe concepts as if you are planning a film scene or visual sequence."
            }
            Role::FashionConsultant => {
                "You are a fashion consultant with an avant-garde eye. Think in terms of form, \
                 fabric, tone, and how clothing expresses emotion, era, and identity."
            }
            Role::DanceCoach => {
                "You are a dance coach. Translate every idea into movement: rhythm, body lines, \
                 weight shifts, and spatial patterns. Explain how a dancer would embody it."
            }
            Role::PerformingArtsCritic => {
                "You are a performing arts critic. Assess emotional impact, stagecraft, pacing, \
                 and audience experience, and explain what makes a performance land or fall flat."
            }
            Role::GraphicDesigner => {
                "You are a professional graphic designer. Focus on layout, composition, and how \
                 design communicates mood. Think visually and describe spatial balance and rhythm."
            }
            Role::StoryboardArtist => {
                "You are a storyboard artist. Visualize action beats, body language, and \
                 composition. Explain the scene framing with cinematic clarity."
            }
        }
    }
}

/// Named bundle of visual-style keywords appended to composed prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePreset {
    Cinematic,
    ConceptArt,
    PosterGraphic,
    Watercolor,
    Render3D,
    Anime,
}

impl StylePreset {
    pub fn all() -> &'static [StylePreset] {
        &[
            StylePreset::Cinematic,
            StylePreset::ConceptArt,
            StylePreset::PosterGraphic,
            StylePreset::Watercolor,
            StylePreset::Render3D,
            StylePreset::Anime,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Cinematic => "Cinematic",
            StylePreset::ConceptArt => "Concept Art",
            StylePreset::PosterGraphic => "Poster Graphic",
            StylePreset::Watercolor => "Watercolor",
            StylePreset::Render3D => "3D Render",
            StylePreset::Anime => "Anime",
        }
    }

    /// Keyword clause for this preset. Empty string means no contribution.
    pub fn hint(&self) -> &'static str {
        match self {
            StylePreset::Cinematic => {
                "cinematic lighting, shallow depth of field, filmic color grading, dramatic composition"
            }
            StylePreset::ConceptArt => {
                "digital concept art, painterly brushwork, atmospheric perspective, detailed environment design"
            }
            StylePreset::PosterGraphic => {
                "bold poster graphic, flat color blocking, strong typography-ready negative space"
            }
            StylePreset::Watercolor => {
                "soft watercolor wash, visible paper texture, loose expressive edges"
            }
            StylePreset::Render3D => {
                "high-fidelity 3D render, physically based materials, studio lighting, octane style"
            }
            StylePreset::Anime => {
                "anime illustration, clean line art, cel shading, vivid color palette"
            }
        }
    }
}

/// Supported output dimensions. The string form is the provider's literal
/// size encoding and must not be reformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    Square1024,
    Landscape1344,
    Portrait1344,
    Square2048,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square1024 => "1024x1024",
            ImageSize::Landscape1344 => "1344x768",
            ImageSize::Portrait1344 => "768x1344",
            ImageSize::Square2048 => "2048x2048",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    High,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Standard => "standard",
            Quality::High => "hd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Transparent,
    White,
}

impl Background {
    pub fn from_transparent_flag(transparent: bool) -> Self {
        if transparent {
            Background::Transparent
        } else {
            Background::White
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Transparent => "transparent",
            Background::White => "white",
        }
    }
}
