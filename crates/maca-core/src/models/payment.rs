use crate::InlineImage;

use serde::Serialize;

/// Proof-of-payment submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentProof {
    pub text: String,
    pub image: Option<InlineImage>,
}

impl PaymentProof {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.image.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// Classified by the generative provider.
    Provider,
    /// Provider unreachable; offline text heuristic.
    Fallback,
}

/// Outcome of a payment verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentVerdict {
    pub verified: bool,
    pub feedback: String,
    pub method: VerificationMethod,
}
