use std::sync::Arc;

use log::{info, warn};
use maca_client::{ClassificationRequest, GenerativeProvider, ProviderError};
use maca_config::PayeeConfig;
use maca_core::{PaymentProof, PaymentVerdict, VerificationMethod};
use serde_json::Value;

const DEFAULT_FEEDBACK: &str = "Processamento concluído.";
const FALLBACK_CONFIRMED: &str = "Pagamento identificado via servidor redundante.";
const EMPTY_PROOF: &str = "Envie o texto ou a imagem do comprovante para verificação.";

/// Classifies a proof-of-payment against the configured payee.
///
/// The provider is asked first. When it cannot answer, a text heuristic
/// requiring every payee name fragment decides instead.
pub struct PaymentVerifier {
    provider: Arc<dyn GenerativeProvider>,
    payee: PayeeConfig,
}

impl PaymentVerifier {
    pub fn new(provider: Arc<dyn GenerativeProvider>, payee: PayeeConfig) -> Self {
        Self { provider, payee }
    }

    pub async fn verify(&self, proof: &PaymentProof) -> PaymentVerdict {
        if proof.is_empty() {
            return PaymentVerdict {
                verified: false,
                feedback: EMPTY_PROOF.to_string(),
                method: VerificationMethod::Fallback,
            };
        }

        match self.classify(proof).await {
            Ok(verdict) => {
                info!("Payment classified by provider: verified={}", verdict.verified);
                verdict
            }
            Err(e) => {
                warn!("Payment classification unavailable, using text heuristic: {e}");
                self.fallback(proof)
            }
        }
    }

    async fn classify(&self, proof: &PaymentProof) -> Result<PaymentVerdict, ProviderError> {
        let request = ClassificationRequest {
            prompt: format!(
                "DADOS DO COMPROVANTE: {}. PROMPT: {}",
                proof.text.trim(),
                self.instruction()
            ),
            image: proof.image.clone(),
        };

        let raw = self.provider.classify_payment(&request).await?;
        let parsed: Value = serde_json::from_str(raw.trim())?;
        Ok(Self::verdict_from(&parsed))
    }

    /// Anything but a JSON `true` is a rejection.
    pub(crate) fn verdict_from(parsed: &Value) -> PaymentVerdict {
        let verified = parsed
            .get("verified")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let feedback = parsed
            .get("feedback")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|feedback| !feedback.is_empty())
            .unwrap_or(DEFAULT_FEEDBACK)
            .to_string();

        PaymentVerdict {
            verified,
            feedback,
            method: VerificationMethod::Provider,
        }
    }

    /// Case-insensitive text match on every payee fragment. Image bytes are
    /// never inspected.
    pub(crate) fn fallback(&self, proof: &PaymentProof) -> PaymentVerdict {
        let upper = proof.text.to_uppercase();
        let fragments = self.payee.match_fragments();
        let verified =
            !fragments.is_empty() && fragments.iter().all(|fragment| upper.contains(fragment));

        let feedback = if verified {
            FALLBACK_CONFIRMED.to_string()
        } else {
            format!(
                "Favorecido {} não encontrado no documento.",
                self.payee.legal_name
            )
        };

        PaymentVerdict {
            verified,
            feedback,
            method: VerificationMethod::Fallback,
        }
    }

    fn instruction(&self) -> String {
        let payee = self.payee.legal_name.trim();
        format!(
            "SISTEMA DE VERIFICAÇÃO BANCÁRIA MAÇÃ ART 2025.\n\
             Sua única função é validar se o comprovante de PIX foi enviado para o favorecido correto.\n\
             DESTINATÁRIO OBRIGATÓRIO: {payee}\n\
             INSTRUÇÕES:\n\
             1. Procure no texto ou na imagem o campo \"Favorecido\", \"Recebedor\" ou \"Dados do Destinatário\".\n\
             2. O nome deve ser exatamente \"{payee}\".\n\
             3. Se o nome coincidir, retorne \"verified\": true.\n\
             4. Se o nome for diferente ou não for encontrado, retorne \"verified\": false.\n\
             5. IMPORTANTE: Não mostre o nome de quem pagou. Apenas confirme se o dinheiro caiu na conta do favorecido.\n\
             RETORNE APENAS JSON:\n\
             {{\"verified\": boolean, \"feedback\": \"Mensagem curta de confirmação ou erro de dados.\"}}"
        )
    }
}
