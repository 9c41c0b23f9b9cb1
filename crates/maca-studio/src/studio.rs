use crate::{
    CancellationToken, ConversationLog, FileStore, GenerationJob, GenerationOrchestrator,
    IdentityStore, LocalStore, PaymentVerifier, StudioResult,
};

use std::sync::Arc;

use log::info;
use maca_client::{AccountBackend, GeminiProvider, GenerativeProvider, HttpBackend, RegistrationRequest};
use maca_config::Config;
use maca_core::{
    ChatMessage, Clock, DenialReason, GateDecision, GenerationRequest, GenerationResult,
    PaymentProof, PaymentVerdict, SUBSCRIPTION_TERM_DAYS, Session, SystemClock, UserProfile,
    authorize, days_remaining, debit_credit, grant_subscription,
};
use serde::Serialize;

/// Result of [`Studio::generate`] when nothing failed.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The gate refused; the provider was never contacted.
    Denied { reason: DenialReason },
    Completed {
        result: GenerationResult,
        profile: UserProfile,
        job: GenerationJob,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentOutcome {
    pub verdict: PaymentVerdict,
    pub profile: UserProfile,
}

/// Wires identity, gate, orchestrator, verifier and log together and
/// enforces their ordering: gate before dispatch, debit after completion.
pub struct Studio {
    identity: IdentityStore,
    orchestrator: GenerationOrchestrator,
    verifier: PaymentVerifier,
    backend: Arc<dyn AccountBackend>,
    clock: Arc<dyn Clock>,
}

impl Studio {
    pub fn new(
        local: Arc<dyn LocalStore>,
        backend: Arc<dyn AccountBackend>,
        provider: Arc<dyn GenerativeProvider>,
        clock: Arc<dyn Clock>,
        config: &Config,
    ) -> Self {
        Self {
            identity: IdentityStore::new(local, Arc::clone(&backend), Arc::clone(&clock)),
            orchestrator: GenerationOrchestrator::from_config(
                Arc::clone(&provider),
                &config.generation,
            ),
            verifier: PaymentVerifier::new(provider, config.payee.clone()),
            backend,
            clock,
        }
    }

    /// Production wiring: file store under the config dir, HTTP backend,
    /// Gemini provider and the system clock.
    pub fn from_config(config: &Config) -> StudioResult<Self> {
        let local: Arc<dyn LocalStore> = Arc::new(FileStore::new(config.storage_path()?));
        let backend: Arc<dyn AccountBackend> = Arc::new(HttpBackend::from_config(&config.backend)?);
        let provider: Arc<dyn GenerativeProvider> =
            Arc::new(GeminiProvider::from_config(&config.provider)?);

        Ok(Self::new(local, backend, provider, Arc::new(SystemClock), config))
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn session(&self) -> StudioResult<Option<Session>> {
        Ok(self.identity.session()?)
    }

    pub async fn load_profile(&self, session: Option<&Session>) -> StudioResult<UserProfile> {
        Ok(self.identity.load(session).await?)
    }

    pub async fn save_profile(
        &self,
        session: Option<&Session>,
        profile: &UserProfile,
    ) -> StudioResult<UserProfile> {
        Ok(self.identity.save(session, profile).await?)
    }

    pub async fn register(&self, request: &RegistrationRequest) -> StudioResult<(Session, UserProfile)> {
        Ok(self.identity.register(request).await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> StudioResult<(Session, UserProfile)> {
        Ok(self.identity.login(email, password).await?)
    }

    pub fn logout(&self) -> StudioResult<()> {
        Ok(self.identity.logout()?)
    }

    /// Whole days left on the subscription, 0 when there is none.
    pub fn days_remaining(&self, profile: &UserProfile) -> i64 {
        days_remaining(profile, self.clock.now())
    }

    // =========================================================================
    // Conversation
    // =========================================================================

    pub fn open_log(&self, session: Option<&Session>) -> ConversationLog {
        ConversationLog::open(Arc::clone(&self.backend), session)
    }

    pub async fn history(&self, session: Option<&Session>) -> Vec<ChatMessage> {
        ConversationLog::load(self.backend.as_ref(), session).await
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Gate, generate, then debit exactly once and record both turns.
    ///
    /// A failed job leaves the profile untouched; the user's turn stays in
    /// the log.
    pub async fn generate(
        &self,
        session: Option<&Session>,
        profile: &UserProfile,
        request: &GenerationRequest,
        log: &mut ConversationLog,
        cancel: &CancellationToken,
    ) -> StudioResult<GenerationOutcome> {
        request.validate()?;

        if let GateDecision::Denied { reason } = authorize(profile, request.mode) {
            info!("Generation denied for {}: {reason:?}", profile.id);
            return Ok(GenerationOutcome::Denied { reason });
        }

        let attachment = request.attachment.as_ref().map(|image| image.to_data_uri());
        log.append(ChatMessage::user(
            request.display_text(),
            attachment,
            self.clock.now(),
        ));

        let mut job = GenerationJob::new(request.mode);
        let result = self
            .orchestrator
            .run(&mut job, request, profile, cancel)
            .await?;

        let debited = debit_credit(profile);
        let saved = self.identity.save(session, &debited).await?;

        log.append(ChatMessage::assistant(&result, self.clock.now()));

        Ok(GenerationOutcome::Completed {
            result,
            profile: saved,
            job,
        })
    }

    // =========================================================================
    // Payment
    // =========================================================================

    /// Verify a payment proof and, when it checks out, grant a 30-day term.
    pub async fn submit_payment_proof(
        &self,
        session: Option<&Session>,
        profile: &UserProfile,
        proof: &PaymentProof,
    ) -> StudioResult<PaymentOutcome> {
        let verdict = self.verifier.verify(proof).await;

        if !verdict.verified {
            return Ok(PaymentOutcome {
                verdict,
                profile: profile.clone(),
            });
        }

        let granted = grant_subscription(profile, SUBSCRIPTION_TERM_DAYS, self.clock.now());
        let saved = self.identity.save(session, &granted).await?;
        info!("Subscription granted to {} until {:?}", saved.id, saved.subscription_expiry);

        Ok(PaymentOutcome {
            verdict,
            profile: saved,
        })
    }
}
