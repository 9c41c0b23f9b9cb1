use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid generation mode: {value} {location}")]
    InvalidGenerationMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unsupported image type: {mime_type} {location}")]
    UnsupportedImageType {
        mime_type: String,
        location: ErrorLocation,
    },

    #[error("Invalid image data: {message} {location}")]
    InvalidImageData {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_image_data(message: impl Into<String>) -> Self {
        Self::InvalidImageData {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
