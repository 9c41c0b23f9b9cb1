use crate::{GenerationError, IdentityError};

use std::panic::Location;

use error_location::ErrorLocation;
use maca_client::{BackendError, ProviderError};
use maca_config::ConfigError;
use maca_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the [`Studio`](crate::Studio) facade.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Studio setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },
}

impl StudioError {
    #[track_caller]
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Plain, actionable text for the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Identity(e) => e.user_message(),
            Self::Generation(e) => e.user_message().to_string(),
            Self::Core(CoreError::UnsupportedImageType { .. }) => {
                "Formato de imagem não suportado. Use JPEG, PNG, GIF ou WEBP.".to_string()
            }
            Self::Core(CoreError::InvalidGenerationMode { value, .. }) => format!(
                "Modo \"{value}\" desconhecido. Use post, storys, carousel, menu, video ou logo."
            ),
            Self::Core(CoreError::Validation { message, .. }) => message.clone(),
            Self::Core(_) => "Não foi possível ler os dados enviados.".to_string(),
            Self::Setup { .. } => {
                "O aplicativo não está configurado corretamente. Verifique o arquivo de configuração."
                    .to_string()
            }
        }
    }
}

impl From<ConfigError> for StudioError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::setup(err.to_string())
    }
}

impl From<BackendError> for StudioError {
    #[track_caller]
    fn from(err: BackendError) -> Self {
        Self::setup(err.to_string())
    }
}

impl From<ProviderError> for StudioError {
    #[track_caller]
    fn from(err: ProviderError) -> Self {
        Self::setup(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
