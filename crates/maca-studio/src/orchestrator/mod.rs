pub(crate) mod error;
pub(crate) mod job;
pub(crate) mod prompt;

use crate::CancellationToken;
use crate::orchestrator::error::{GenerationError, Result as OrchestratorResult};
use crate::orchestrator::job::{GenerationJob, JobState};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use maca_client::{GenerativeProvider, TextRequest, VideoJobStatus};
use maca_config::GenerationConfig;
use maca_core::{GenerationRequest, GenerationResult, UserProfile};
use tokio::time::{Instant, sleep_until};

/// Drives one generation request through the provider, polling video jobs
/// until they finish, time out or are cancelled.
pub struct GenerationOrchestrator {
    provider: Arc<dyn GenerativeProvider>,
    poll_interval: Duration,
    max_wait: Duration,
}

impl GenerationOrchestrator {
    pub fn new(provider: Arc<dyn GenerativeProvider>, poll_interval: Duration, max_wait: Duration) -> Self {
        Self {
            provider,
            poll_interval,
            max_wait,
        }
    }

    pub fn from_config(provider: Arc<dyn GenerativeProvider>, config: &GenerationConfig) -> Self {
        Self::new(provider, config.poll_interval(), config.max_wait())
    }

    /// Run `job` to a terminal state.
    ///
    /// No retries: the first provider error fails the job.
    pub async fn run(
        &self,
        job: &mut GenerationJob,
        request: &GenerationRequest,
        profile: &UserProfile,
        cancel: &CancellationToken,
    ) -> OrchestratorResult<GenerationResult> {
        job.transition(JobState::Dispatched);

        let outcome = if request.mode.is_video() {
            self.run_video(job, request, profile, cancel).await
        } else {
            self.run_artwork(request, profile).await
        };

        match &outcome {
            Ok(_) => job.transition(JobState::Completed),
            Err(e) => {
                warn!("Generation job {} failed: {e}", job.id);
                job.transition(JobState::Failed {
                    reason: e.reason(),
                })
            }
        }

        outcome
    }

    async fn run_artwork(
        &self,
        request: &GenerationRequest,
        profile: &UserProfile,
    ) -> OrchestratorResult<GenerationResult> {
        let text_request = TextRequest {
            system_instruction: prompt::system_framing(profile),
            prompt: prompt::text_prompt(request),
            image: request.attachment.clone(),
        };
        let text = self
            .provider
            .complete_text(&text_request)
            .await
            .map_err(GenerationError::provider_unavailable)?;

        let images = self
            .provider
            .generate_image(&prompt::image_prompt(request), request.mode.aspect_ratio())
            .await
            .map_err(GenerationError::provider_unavailable)?;

        if images.is_empty() {
            info!("Provider returned no image for {}", request.mode);
        }

        Ok(GenerationResult::Artwork {
            text,
            images: images.first().map(|image| image.to_data_uri()).into_iter().collect(),
        })
    }

    async fn run_video(
        &self,
        job: &mut GenerationJob,
        request: &GenerationRequest,
        profile: &UserProfile,
        cancel: &CancellationToken,
    ) -> OrchestratorResult<GenerationResult> {
        let started = Instant::now();
        let video_job = self
            .provider
            .start_video_job(&prompt::video_prompt(request, profile), request.mode.aspect_ratio())
            .await
            .map_err(GenerationError::provider_unavailable)?;
        debug!("Video job {} started as {}", job.id, video_job.name);

        // Nothing runs past the deadline: sleeps are clipped to it and an
        // in-flight poll is abandoned when it passes.
        let deadline = started + self.max_wait;
        let mut attempt: u32 = 0;
        loop {
            if cancel.is_cancelled() {
                return Err(GenerationError::cancelled());
            }

            let wake = (Instant::now() + self.poll_interval).min(deadline);
            tokio::select! {
                _ = cancel.cancelled() => return Err(GenerationError::cancelled()),
                _ = sleep_until(wake) => {}
            }

            if Instant::now() >= deadline {
                return Err(GenerationError::timeout(self.max_wait));
            }

            attempt += 1;
            job.transition(JobState::Polling { attempt });

            let status = tokio::select! {
                _ = cancel.cancelled() => return Err(GenerationError::cancelled()),
                _ = sleep_until(deadline) => return Err(GenerationError::timeout(self.max_wait)),
                status = self.provider.poll_video_job(&video_job) => {
                    status.map_err(GenerationError::provider_unavailable)?
                }
            };

            if let VideoJobStatus::Done { uri } = status {
                return Ok(GenerationResult::Video { uri });
            }
        }
    }
}
