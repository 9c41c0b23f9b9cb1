use crate::{
    ClassificationRequest, GeneratedImage, GenerativeProvider, ProviderError, ProviderResult,
    TextRequest, VideoJob, VideoJobStatus,
};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use maca_config::ProviderConfig;
use maca_core::InlineImage;
use reqwest::Client as ReqwestClient;
use serde_json::{Map, Value, json};

/// Keeps the key out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Used when an inline image part carries no mime type.
const DEFAULT_GENERATED_MIME: &str = "image/png";

/// Gemini REST (`v1beta`) implementation of [`GenerativeProvider`].
pub struct GeminiProvider {
    api_base: String,
    api_key: Option<String>,
    text_model: String,
    image_model: String,
    video_model: String,
    verification_model: String,
    http: ReqwestClient,
}

impl GeminiProvider {
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_base: config.api_base.trim().trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .as_ref()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            video_model: config.video_model.clone(),
            verification_model: config.verification_model.clone(),
            http,
        })
    }

    fn api_key(&self) -> ProviderResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(ProviderError::missing_credential)
    }

    pub(crate) fn endpoint_for_model(&self, model: &str, method: &str) -> String {
        let trimmed = model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{trimmed}")
        };
        format!("{}/{}:{}", self.api_base, model_path, method)
    }

    async fn post_json(&self, url: &str, body: &Value) -> ProviderResult<Value> {
        let key = self.api_key()?;
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, key)
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn get_json(&self, url: &str) -> ProviderResult<Value> {
        let key = self.api_key()?;
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, key)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> ProviderResult<Value> {
        let status = response.status();
        let body = response.text().await?;
        debug!("provider answered {status}");

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(ProviderError::api(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) fn inline_part(image: &InlineImage) -> Value {
        json!({
            "inlineData": {
                "data": image.to_base64(),
                "mimeType": image.mime_type,
            }
        })
    }

    pub(crate) fn build_text_body(request: &TextRequest) -> Value {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(image) = request.image.as_ref() {
            parts.push(Self::inline_part(image));
        }

        json!({
            "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
            "contents": [{ "role": "user", "parts": parts }],
        })
    }

    pub(crate) fn build_image_body(prompt: &str, aspect_ratio: &str) -> Value {
        json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": { "aspectRatio": aspect_ratio },
            },
        })
    }

    pub(crate) fn build_classification_body(request: &ClassificationRequest) -> Value {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(image) = request.image.as_ref() {
            parts.push(Self::inline_part(image));
        }

        json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": { "responseMimeType": "application/json" },
        })
    }

    pub(crate) fn build_video_body(prompt: &str, aspect_ratio: &str) -> Value {
        json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "aspectRatio": aspect_ratio, "sampleCount": 1 },
        })
    }

    fn candidate_parts(payload: &Value) -> Vec<Map<String, Value>> {
        payload
            .get("candidates")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|candidate| candidate.pointer("/content/parts").and_then(Value::as_array))
            .flatten()
            .filter_map(|part| part.as_object().cloned())
            .collect()
    }

    /// Concatenated text parts of every candidate.
    pub(crate) fn extract_text(payload: &Value) -> ProviderResult<String> {
        if payload.get("candidates").and_then(Value::as_array).is_none() {
            return Err(ProviderError::malformed("response has no candidates"));
        }

        Ok(Self::candidate_parts(payload)
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(""))
    }

    pub(crate) fn extract_images(payload: &Value) -> Vec<GeneratedImage> {
        Self::candidate_parts(payload)
            .iter()
            .filter_map(|part| {
                part.get("inlineData")
                    .or_else(|| part.get("inline_data"))
                    .and_then(Value::as_object)
            })
            .filter_map(|inline| {
                let data = inline.get("data").and_then(Value::as_str)?;
                if data.is_empty() {
                    return None;
                }
                let mime_type = inline
                    .get("mimeType")
                    .or_else(|| inline.get("mime_type"))
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_GENERATED_MIME);
                Some(GeneratedImage {
                    data: data.to_string(),
                    mime_type: mime_type.to_string(),
                })
            })
            .collect()
    }

    pub(crate) fn parse_operation(payload: &Value) -> ProviderResult<VideoJobStatus> {
        if !payload.get("done").and_then(Value::as_bool).unwrap_or(false) {
            return Ok(VideoJobStatus::Pending);
        }

        if let Some(error) = payload.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("video job failed");
            let code = error.get("code").and_then(Value::as_u64).unwrap_or(500);
            return Err(ProviderError::api(code as u16, message));
        }

        let uri = payload
            .pointer("/response/generateVideoResponse/generatedSamples/0/video/uri")
            .or_else(|| payload.pointer("/response/generatedVideos/0/video/uri"))
            .and_then(Value::as_str)
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| ProviderError::malformed("finished video job has no video uri"))?;

        Ok(VideoJobStatus::Done {
            uri: uri.to_string(),
        })
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn complete_text(&self, request: &TextRequest) -> ProviderResult<String> {
        let url = self.endpoint_for_model(&self.text_model, "generateContent");
        let payload = self.post_json(&url, &Self::build_text_body(request)).await?;
        Self::extract_text(&payload)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> ProviderResult<Vec<GeneratedImage>> {
        let url = self.endpoint_for_model(&self.image_model, "generateContent");
        let payload = self
            .post_json(&url, &Self::build_image_body(prompt, aspect_ratio))
            .await?;
        Ok(Self::extract_images(&payload))
    }

    async fn start_video_job(&self, prompt: &str, aspect_ratio: &str) -> ProviderResult<VideoJob> {
        let url = self.endpoint_for_model(&self.video_model, "predictLongRunning");
        let payload = self
            .post_json(&url, &Self::build_video_body(prompt, aspect_ratio))
            .await?;

        let name = payload
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ProviderError::malformed("video job response has no operation name"))?;

        Ok(VideoJob {
            name: name.to_string(),
        })
    }

    async fn poll_video_job(&self, job: &VideoJob) -> ProviderResult<VideoJobStatus> {
        let url = format!("{}/{}", self.api_base, job.name.trim_start_matches('/'));
        let payload = self.get_json(&url).await?;
        Self::parse_operation(&payload)
    }

    async fn classify_payment(&self, request: &ClassificationRequest) -> ProviderResult<String> {
        let url = self.endpoint_for_model(&self.verification_model, "generateContent");
        let payload = self
            .post_json(&url, &Self::build_classification_body(request))
            .await?;
        Self::extract_text(&payload)
    }
}
