use crate::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use maca_client::BackendError;
use thiserror::Error;

/// Errors from identity and session management.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Non-network backend failure, surfaced verbatim.
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Backend unreachable and no matching local identity {location}")]
    NetworkUnavailable { location: ErrorLocation },

    #[error("Failed to serialize profile: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn network_unavailable() -> Self {
        Self::NetworkUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Store(e) => e.recovery_hint().to_string(),
            Self::Backend(e) => e.user_message(),
            Self::NetworkUnavailable { .. } => {
                "Não foi possível conectar ao servidor. Verifique sua internet.".to_string()
            }
            Self::Serialization { .. } => {
                "Erro interno ao preparar seus dados. Por favor, reporte o problema.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
