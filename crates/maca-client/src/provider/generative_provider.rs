use crate::ProviderResult;

use async_trait::async_trait;
use maca_core::InlineImage;

/// Multimodal completion input: framing, prompt and an optional image.
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub image: Option<InlineImage>,
}

/// Structured payment classification input. The answer is raw JSON text.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
}

/// One image returned by the provider, still base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub data: String,
    pub mime_type: String,
}

impl GeneratedImage {
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Handle of a long-running video job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoJob {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoJobStatus {
    Pending,
    Done { uri: String },
}

#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    async fn complete_text(&self, request: &TextRequest) -> ProviderResult<String>;

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> ProviderResult<Vec<GeneratedImage>>;

    async fn start_video_job(&self, prompt: &str, aspect_ratio: &str) -> ProviderResult<VideoJob>;

    async fn poll_video_job(&self, job: &VideoJob) -> ProviderResult<VideoJobStatus>;

    async fn classify_payment(&self, request: &ClassificationRequest) -> ProviderResult<String>;
}
