use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const PORTRAIT_ASPECT_RATIO: &str = "9:16";
pub const SQUARE_ASPECT_RATIO: &str = "1:1";

/// Kind of artwork the studio is asked for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Post,
    Storys,
    Carousel,
    Menu,
    Video,
    Logo,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 6] = [
        Self::Post,
        Self::Storys,
        Self::Carousel,
        Self::Menu,
        Self::Video,
        Self::Logo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Storys => "storys",
            Self::Carousel => "carousel",
            Self::Menu => "menu",
            Self::Video => "video",
            Self::Logo => "logo",
        }
    }

    /// Video is the only long-running mode.
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }

    /// Aspect ratio sent to the provider for this mode.
    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            Self::Storys | Self::Video => PORTRAIT_ASPECT_RATIO,
            _ => SQUARE_ASPECT_RATIO,
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "storys" => Ok(Self::Storys),
            "carousel" => Ok(Self::Carousel),
            "menu" => Ok(Self::Menu),
            "video" => Ok(Self::Video),
            "logo" => Ok(Self::Logo),
            _ => Err(CoreError::InvalidGenerationMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
