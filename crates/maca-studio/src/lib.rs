//! Entitlement and generation-job engine behind the Maçã ART studio.

pub mod cancellation;
pub mod conversation_log;
pub mod error;
pub mod identity;
pub mod orchestrator;
pub mod reconciliation;
pub mod store;
pub mod studio;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use cancellation::CancellationToken;
pub use conversation_log::ConversationLog;
pub use error::{Result as StudioResult, StudioError};
pub use identity::IdentityStore;
pub use identity::error::{IdentityError, Result as IdentityResult};
pub use orchestrator::GenerationOrchestrator;
pub use orchestrator::error::{GenerationError, Result as OrchestratorResult};
pub use orchestrator::job::{FailureReason, GenerationJob, JobState};
pub use reconciliation::{ProfileSource, Reconciled, ReconciliationPolicy, RemoteOutcome};
pub use store::{
    FileStore, LOCAL_USER_KEY, LocalStore, MemoryStore, SESSION_TOKEN_KEY, StoreError, StoreResult,
};
pub use studio::{GenerationOutcome, PaymentOutcome, Studio};
pub use verifier::PaymentVerifier;
