use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};

use std::path::Path;
use std::str::FromStr;

use log::info;
use maca_client::RegistrationRequest;
use maca_core::{
    GenerationMode, GenerationRequest, InlineImage, PaymentProof, Session, can_generate,
};
use maca_studio::{CancellationToken, GenerationOutcome, Studio, StudioError};
use serde_json::{Value, json};

/// Reported for files whose extension is not an accepted image type, so the
/// core rejects them with its own message.
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Execute one command against the studio and return its JSON result.
pub async fn run(
    studio: &Studio,
    command: Commands,
    cancel: &CancellationToken,
) -> CliResult<Value> {
    match command {
        Commands::Status => status(studio).await,
        Commands::Register {
            email,
            password,
            company_name,
            company_type,
            description,
        } => {
            let request = RegistrationRequest {
                email,
                password,
                company_name,
                company_type,
                description,
            };
            let (session, profile) = studio.register(&request).await?;
            Ok(json!({ "session": session_label(Some(&session)), "profile": profile }))
        }
        Commands::Login { email, password } => {
            let (session, profile) = studio.login(&email, &password).await?;
            Ok(json!({ "session": session_label(Some(&session)), "profile": profile }))
        }
        Commands::Logout => {
            studio.logout()?;
            Ok(json!({ "session": session_label(None) }))
        }
        Commands::SaveProfile {
            company_name,
            company_type,
            description,
            logo,
        } => {
            let session = studio.session()?;
            let mut profile = studio.load_profile(session.as_ref()).await?;
            if let Some(company_name) = company_name {
                profile.company_name = company_name;
            }
            if let Some(company_type) = company_type {
                profile.company_type = company_type;
            }
            if let Some(description) = description {
                profile.description = description;
            }
            if let Some(path) = logo {
                profile.company_logo = Some(read_image(&path)?.to_data_uri());
            }
            let saved = studio.save_profile(session.as_ref(), &profile).await?;
            Ok(json!({ "profile": saved }))
        }
        Commands::Generate {
            mode,
            briefing,
            image,
        } => {
            let mode = GenerationMode::from_str(&mode).map_err(StudioError::from)?;
            let mut request = GenerationRequest::new(mode, briefing);
            if let Some(path) = image {
                request = request.with_attachment(read_image(&path)?);
            }
            generate(studio, &request, cancel).await
        }
        Commands::VerifyPayment { text, image } => {
            let mut proof = PaymentProof::text(text);
            if let Some(path) = image {
                proof = proof.with_image(read_image(&path)?);
            }
            let session = studio.session()?;
            let profile = studio.load_profile(session.as_ref()).await?;
            let outcome = studio
                .submit_payment_proof(session.as_ref(), &profile, &proof)
                .await?;
            Ok(serde_json::to_value(outcome)?)
        }
        Commands::History => {
            let session = studio.session()?;
            let messages = studio.history(session.as_ref()).await;
            Ok(json!({ "messages": messages }))
        }
    }
}

async fn status(studio: &Studio) -> CliResult<Value> {
    let session = studio.session()?;
    let profile = studio.load_profile(session.as_ref()).await?;

    Ok(json!({
        "session": session_label(session.as_ref()),
        "canGenerate": can_generate(&profile),
        "daysRemaining": studio.days_remaining(&profile),
        "profile": profile,
    }))
}

async fn generate(
    studio: &Studio,
    request: &GenerationRequest,
    cancel: &CancellationToken,
) -> CliResult<Value> {
    let session = studio.session()?;
    let profile = studio.load_profile(session.as_ref()).await?;
    let mut log = studio.open_log(session.as_ref());

    let outcome = studio
        .generate(session.as_ref(), &profile, request, &mut log, cancel)
        .await;
    log.close().await;

    match outcome? {
        GenerationOutcome::Denied { reason } => Ok(json!({
            "status": "denied",
            "reason": reason,
            "message": reason.user_message(),
        })),
        GenerationOutcome::Completed {
            result,
            profile,
            job,
        } => {
            info!("Job {} finished after {} poll(s)", job.id, job.poll_attempts());
            Ok(json!({
                "status": "completed",
                "jobId": job.id,
                "result": result,
                "profile": profile,
            }))
        }
    }
}

fn session_label(session: Option<&Session>) -> &'static str {
    match session {
        Some(session) if session.is_online() => "online",
        Some(_) => "offline",
        None => "none",
    }
}

fn read_image(path: &Path) -> CliResult<InlineImage> {
    let bytes = std::fs::read(path).map_err(|e| CliError::read_file(path, e))?;
    let mime_type = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(InlineImage::mime_for_extension)
        .unwrap_or(UNKNOWN_MIME_TYPE);

    Ok(InlineImage::from_bytes(bytes, mime_type).map_err(StudioError::from)?)
}
