pub mod clock;
pub mod entitlement;
pub mod error;
pub mod gate;
pub mod models;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entitlement::{
    DAILY_CREDIT_GRANT, SUBSCRIPTION_TERM_DAYS, UNLIMITED_CREDITS, days_remaining, debit_credit,
    grant_subscription, guest_profile, refresh, subscription_active,
};
pub use error::{CoreError, Result as CoreResult};
pub use gate::{DenialReason, GateDecision, authorize, can_generate};
pub use models::chat_message::{ChatMessage, ChatRole};
pub use models::conversation::Conversation;
pub use models::generation_mode::GenerationMode;
pub use models::generation_request::GenerationRequest;
pub use models::generation_result::GenerationResult;
pub use models::inline_image::{ACCEPTED_IMAGE_TYPES, InlineImage};
pub use models::payment::{PaymentProof, PaymentVerdict, VerificationMethod};
pub use models::session::{OFFLINE_TOKEN, Session};
pub use models::user_profile::UserProfile;
