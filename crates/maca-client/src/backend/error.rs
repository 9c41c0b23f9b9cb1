use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors returned by the account backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend answered with a non-2xx status and a message meant for the user.
    #[error("Backend rejected request: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The bearer token was refused.
    #[error("Backend refused credentials {location}")]
    Unauthorized { location: ErrorLocation },

    /// The backend could not be reached at all.
    #[error("Backend unreachable: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        BackendError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        BackendError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Connectivity failure without an underlying transport error.
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        BackendError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Network-class failures are the only ones that trigger offline fallback.
    pub fn is_network(&self) -> bool {
        matches!(self, BackendError::Network { .. })
    }

    /// Message safe to show the user as-is.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Validation { message, .. } => message.clone(),
            BackendError::Unauthorized { .. } => {
                "Sua sessão expirou. Entre novamente.".to_string()
            }
            BackendError::Network { .. } => {
                "Não foi possível conectar ao servidor. Verifique sua internet.".to_string()
            }
            BackendError::Json { .. } => {
                "O servidor respondeu de forma inesperada. Tente novamente.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for BackendError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        BackendError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        BackendError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
