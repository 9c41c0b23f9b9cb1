use crate::{GenerationMode, UserProfile};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    OutOfCredits,
}

impl DenialReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::OutOfCredits => {
                "Você já usou seus 10 créditos diários. Renove via PIX ou aguarde a meia-noite."
            }
        }
    }
}

/// Outcome of the pre-dispatch entitlement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Proceed,
    Denied { reason: DenialReason },
}

impl GateDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

pub fn can_generate(profile: &UserProfile) -> bool {
    profile.is_subscribed || profile.daily_credits > 0
}

/// Check-then-act: nothing is reserved, the debit comes after a completed
/// generation. Every mode costs one credit.
pub fn authorize(profile: &UserProfile, _mode: GenerationMode) -> GateDecision {
    if can_generate(profile) {
        GateDecision::Proceed
    } else {
        GateDecision::Denied {
            reason: DenialReason::OutOfCredits,
        }
    }
}
