use crate::{CoreError, CoreResult, GenerationMode, InlineImage};

/// One generation intent from the user. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub briefing: String,
    pub attachment: Option<InlineImage>,
}

impl GenerationRequest {
    pub fn new(mode: GenerationMode, briefing: impl Into<String>) -> Self {
        Self {
            mode,
            briefing: briefing.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: InlineImage) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// A request needs a briefing or an attached image.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.briefing.trim().is_empty() && self.attachment.is_none() {
            return Err(CoreError::validation(
                "a briefing or an attached image is required",
            ));
        }
        Ok(())
    }

    /// Briefing sent to the provider.
    pub fn prompt_text(&self) -> String {
        match self.briefing.trim() {
            "" => format!("Design profissional para {}", self.mode),
            briefing => briefing.to_string(),
        }
    }

    /// Text recorded in the conversation for the user's turn.
    pub fn display_text(&self) -> String {
        match self.briefing.trim() {
            "" => format!("Gerar arte para {}", self.mode),
            briefing => briefing.to_string(),
        }
    }
}
