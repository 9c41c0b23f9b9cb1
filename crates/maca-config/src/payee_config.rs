use crate::{ConfigError, ConfigErrorResult, DEFAULT_PAYEE_LEGAL_NAME};

use serde::Deserialize;

/// Tokens this short are name particles ("DE", "DA", "E") and are skipped.
const MIN_FRAGMENT_LEN: usize = 3;

/// Expected recipient of PIX payments.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayeeConfig {
    /// Exact legal name the proof must show as recipient
    pub legal_name: String,
    /// Name fragments the offline heuristic requires. Empty = derive from `legal_name`.
    pub fragments: Vec<String>,
}

impl Default for PayeeConfig {
    fn default() -> Self {
        Self {
            legal_name: String::from(DEFAULT_PAYEE_LEGAL_NAME),
            fragments: Vec::new(),
        }
    }
}

impl PayeeConfig {
    pub fn new(legal_name: impl Into<String>) -> Self {
        Self {
            legal_name: legal_name.into(),
            fragments: Vec::new(),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.legal_name.trim().is_empty() {
            return Err(ConfigError::payee("payee.legal_name cannot be empty"));
        }

        if self.match_fragments().is_empty() {
            return Err(ConfigError::payee(format!(
                "payee.legal_name '{}' yields no name fragments; set payee.fragments",
                self.legal_name
            )));
        }

        Ok(())
    }

    /// Upper-cased fragments used by the text heuristic.
    pub fn match_fragments(&self) -> Vec<String> {
        if !self.fragments.is_empty() {
            return self
                .fragments
                .iter()
                .map(|f| f.trim().to_uppercase())
                .filter(|f| !f.is_empty())
                .collect();
        }

        self.legal_name
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_FRAGMENT_LEN)
            .map(str::to_uppercase)
            .collect()
    }
}
