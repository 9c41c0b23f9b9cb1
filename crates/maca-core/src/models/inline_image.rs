use crate::{CoreError, CoreResult};

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use error_location::ErrorLocation;

pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Assumed when a bare base64 payload arrives without a data-URI header.
const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

/// Raw image bytes plus their mime type.
#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl InlineImage {
    /// Rejects anything outside [`ACCEPTED_IMAGE_TYPES`] and empty payloads.
    #[track_caller]
    pub fn from_bytes(bytes: Vec<u8>, mime_type: impl Into<String>) -> CoreResult<Self> {
        let mime_type = mime_type.into().trim().to_lowercase();
        if !ACCEPTED_IMAGE_TYPES.contains(&mime_type.as_str()) {
            return Err(CoreError::UnsupportedImageType {
                mime_type,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if bytes.is_empty() {
            return Err(CoreError::invalid_image_data("image payload is empty"));
        }
        Ok(Self { bytes, mime_type })
    }

    /// Accepts `data:<mime>;base64,<payload>` or a bare base64 payload.
    #[track_caller]
    pub fn from_data_uri(value: &str) -> CoreResult<Self> {
        let value = value.trim();
        let (mime_type, payload) = match value.split_once(',') {
            Some((header, payload)) => {
                let mime_type = header
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .filter(|mime| !mime.is_empty())
                    .unwrap_or(DEFAULT_IMAGE_TYPE);
                (mime_type, payload)
            }
            None => (DEFAULT_IMAGE_TYPE, value),
        };

        let bytes = BASE64
            .decode(payload.trim().as_bytes())
            .map_err(|e| CoreError::invalid_image_data(format!("base64 decode failed: {e}")))?;

        Self::from_bytes(bytes, mime_type)
    }

    /// Guess the mime type from a file extension.
    pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            _ => None,
        }
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

// Bytes are elided; attachments can be megabytes.
impl std::fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
