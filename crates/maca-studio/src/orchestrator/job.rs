use log::{info, warn};
use maca_core::GenerationMode;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    ProviderUnavailable,
    Timeout,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Dispatched,
    Polling { attempt: u32 },
    Completed,
    Failed { reason: FailureReason },
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed { .. })
    }
}

/// Lifecycle record of one generation request.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub id: Uuid,
    pub mode: GenerationMode,
    state: JobState,
    history: Vec<JobState>,
}

impl GenerationJob {
    pub fn new(mode: GenerationMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            state: JobState::Idle,
            history: vec![JobState::Idle],
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    /// Every state the job has been in, oldest first.
    pub fn history(&self) -> &[JobState] {
        &self.history
    }

    pub fn poll_attempts(&self) -> u32 {
        self.history
            .iter()
            .filter(|state| matches!(state, JobState::Polling { .. }))
            .count() as u32
    }

    pub(crate) fn transition(&mut self, next: JobState) {
        if self.state.is_terminal() {
            warn!("Job {} already {:?}, ignoring {:?}", self.id, self.state, next);
            return;
        }

        info!("Job {} ({}): {:?} -> {:?}", self.id, self.mode, self.state, next);
        self.state = next;
        self.history.push(next);
    }
}
