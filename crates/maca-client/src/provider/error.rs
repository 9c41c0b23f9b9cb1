use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from the generative provider. Callers treat every variant as
/// "provider unavailable"; the variants exist for logs.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider API key is not configured {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Provider request failed: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed provider response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn missing_credential() -> Self {
        ProviderError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        ProviderError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// The URL is dropped so request targets never reach the logs.
impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        ProviderError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ProviderError::malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
