use crate::GenerationResult;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the conversation log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, image_url: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content: content.into(),
            image_url,
            image_urls: None,
            video_url: None,
            timestamp: now,
        }
    }

    pub fn assistant(result: &GenerationResult, now: DateTime<Utc>) -> Self {
        let (image_urls, video_url) = match result {
            GenerationResult::Artwork { images, .. } => (Some(images.clone()), None),
            GenerationResult::Video { uri } => (None, Some(uri.clone())),
        };

        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content: result.text().to_string(),
            image_url: None,
            image_urls,
            video_url,
            timestamp: now,
        }
    }
}
