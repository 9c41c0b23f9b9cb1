use serde::{Deserialize, Serialize};

/// Artifact produced by a completed generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Text plus zero or more images as data URIs.
    Artwork { text: String, images: Vec<String> },
    /// A single generated video.
    Video { uri: String },
}

impl GenerationResult {
    pub fn text(&self) -> &str {
        match self {
            Self::Artwork { text, .. } => text,
            Self::Video { .. } => "",
        }
    }

    pub fn images(&self) -> &[String] {
        match self {
            Self::Artwork { images, .. } => images,
            Self::Video { .. } => &[],
        }
    }

    pub fn video_uri(&self) -> Option<&str> {
        match self {
            Self::Video { uri } => Some(uri),
            Self::Artwork { .. } => None,
        }
    }
}
