use crate::orchestrator::job::FailureReason;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use maca_client::ProviderError;
use thiserror::Error;

/// Why a generation job ended in `Failed`.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation provider unavailable: {source} {location}")]
    ProviderUnavailable {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Video job did not finish within {waited:?} {location}")]
    Timeout {
        waited: Duration,
        location: ErrorLocation,
    },

    #[error("Generation cancelled {location}")]
    Cancelled { location: ErrorLocation },
}

impl GenerationError {
    #[track_caller]
    pub fn provider_unavailable(source: ProviderError) -> Self {
        Self::ProviderUnavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(waited: Duration) -> Self {
        Self::Timeout {
            waited,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn reason(&self) -> FailureReason {
        match self {
            Self::ProviderUnavailable { .. } => FailureReason::ProviderUnavailable,
            Self::Timeout { .. } => FailureReason::Timeout,
            Self::Cancelled { .. } => FailureReason::Cancelled,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable { .. } => {
                "O estúdio de criação está indisponível no momento. Tente novamente em instantes."
            }
            Self::Timeout { .. } => "A geração do vídeo demorou demais. Tente novamente.",
            Self::Cancelled { .. } => "Geração cancelada.",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
