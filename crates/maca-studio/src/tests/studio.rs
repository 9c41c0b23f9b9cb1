use crate::tests::{MockBackend, MockProvider, noon, profile};
use crate::{CancellationToken, GenerationOutcome, MemoryStore, Studio, StudioError};

use std::sync::Arc;

use chrono::Duration;
use googletest::assert_that;
use googletest::prelude::eq;
use maca_config::Config;
use maca_core::{
    ChatRole, DAILY_CREDIT_GRANT, DenialReason, GenerationMode, GenerationRequest, ManualClock,
    PaymentProof, Session, UNLIMITED_CREDITS,
};

struct Harness {
    studio: Studio,
    backend: Arc<MockBackend>,
    provider: Arc<MockProvider>,
    clock: Arc<ManualClock>,
}

fn harness(backend: Arc<MockBackend>, provider: Arc<MockProvider>) -> Harness {
    let clock = Arc::new(ManualClock::new(noon(10)));
    let config = Config::default();
    let studio = Studio::new(
        Arc::new(MemoryStore::new()),
        backend.clone(),
        provider.clone(),
        clock.clone(),
        &config,
    );
    Harness {
        studio,
        backend,
        provider,
        clock,
    }
}

// =========================================================================
// Generation metering
// =========================================================================

#[tokio::test]
async fn given_fresh_guest_when_eleven_generations_then_eleventh_denied_without_provider_call() {
    // Given
    let h = harness(MockBackend::offline(), MockProvider::new());
    let mut user = h.studio.load_profile(None).await.unwrap();
    let mut log = h.studio.open_log(None);
    let request = GenerationRequest::new(GenerationMode::Post, "Promo");

    // When
    for expected in (0..DAILY_CREDIT_GRANT).rev() {
        let outcome = h
            .studio
            .generate(None, &user, &request, &mut log, &CancellationToken::new())
            .await
            .unwrap();
        let GenerationOutcome::Completed { profile, .. } = outcome else {
            panic!("generation should complete while credits remain");
        };
        assert_that!(profile.daily_credits, eq(expected));
        user = profile;
    }
    let calls_before = h.provider.total_calls();
    let last = h
        .studio
        .generate(None, &user, &request, &mut log, &CancellationToken::new())
        .await
        .unwrap();

    // Then
    assert!(matches!(
        last,
        GenerationOutcome::Denied {
            reason: DenialReason::OutOfCredits
        }
    ));
    assert_eq!(h.provider.total_calls(), calls_before);
    assert_eq!(log.messages().len(), 20);
}

#[tokio::test]
async fn given_provider_failure_when_generate_then_no_debit() {
    // Given
    let h = harness(MockBackend::offline(), MockProvider::unavailable());
    let user = h.studio.load_profile(None).await.unwrap();
    let mut log = h.studio.open_log(None);
    let request = GenerationRequest::new(GenerationMode::Carousel, "Promo");

    // When
    let err = h
        .studio
        .generate(None, &user, &request, &mut log, &CancellationToken::new())
        .await
        .unwrap_err();

    // Then
    assert!(matches!(err, StudioError::Generation(_)));
    assert!(!err.user_message().is_empty());
    let reloaded = h.studio.load_profile(None).await.unwrap();
    assert_that!(reloaded.daily_credits, eq(DAILY_CREDIT_GRANT));
    assert_eq!(log.messages().len(), 1);
    assert_eq!(log.messages()[0].role, ChatRole::User);
}

#[tokio::test]
async fn given_subscriber_when_generate_then_credits_untouched() {
    // Given
    let h = harness(MockBackend::offline(), MockProvider::new());
    let user = h.studio.load_profile(None).await.unwrap();
    let paid = h
        .studio
        .submit_payment_proof(None, &user, &PaymentProof::text("ROBERIA ARAUJO DE LEMOS"))
        .await
        .unwrap()
        .profile;
    let mut log = h.studio.open_log(None);

    // When
    let outcome = h
        .studio
        .generate(
            None,
            &paid,
            &GenerationRequest::new(GenerationMode::Post, "Promo"),
            &mut log,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    // Then
    let GenerationOutcome::Completed { profile, .. } = outcome else {
        panic!("subscriber generation should complete");
    };
    assert_that!(profile.daily_credits, eq(UNLIMITED_CREDITS));
}

#[tokio::test]
async fn given_empty_request_when_generate_then_validation_error_before_gate() {
    let h = harness(MockBackend::offline(), MockProvider::new());
    let user = profile("ana@loja.com", 0, noon(10));
    let mut log = h.studio.open_log(None);

    let err = h
        .studio
        .generate(
            None,
            &user,
            &GenerationRequest::new(GenerationMode::Post, " "),
            &mut log,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Core(_)));
    assert_eq!(h.provider.total_calls(), 0);
}

#[tokio::test]
async fn given_online_session_when_generate_then_debit_patched_and_turns_mirrored() {
    // Given
    let h = harness(MockBackend::online(None), MockProvider::new());
    let session = Session::online("tok-1");
    let user = profile("ana@loja.com", 5, noon(10));
    let mut log = h.studio.open_log(Some(&session));

    // When
    h.studio
        .generate(
            Some(&session),
            &user,
            &GenerationRequest::new(GenerationMode::Post, "Promo"),
            &mut log,
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    log.close().await;

    // Then
    let updates = h.backend.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_that!(updates[0].daily_credits, eq(4));
    let posted = h.backend.posted.lock().unwrap();
    assert_eq!(posted.len(), 2);
    assert_eq!(posted[1].1.role, ChatRole::Assistant);
}

// =========================================================================
// Payment
// =========================================================================

#[tokio::test]
async fn given_verified_proof_when_submitted_then_thirty_day_term_survives_same_day_load() {
    // Given
    let h = harness(MockBackend::offline(), MockProvider::unavailable());
    let user = h.studio.load_profile(None).await.unwrap();

    // When
    let outcome = h
        .studio
        .submit_payment_proof(
            None,
            &user,
            &PaymentProof::text("PAGO PARA ROBERIA ARAUJO DE LEMOS HOJE"),
        )
        .await
        .unwrap();
    h.clock.advance(Duration::hours(2));
    let reloaded = h.studio.load_profile(None).await.unwrap();

    // Then
    assert!(outcome.verdict.verified);
    assert!(reloaded.is_subscribed);
    assert_that!(reloaded.daily_credits, eq(UNLIMITED_CREDITS));
    assert_eq!(reloaded.subscription_expiry, Some(noon(10) + Duration::days(30)));
    assert_eq!(reloaded.last_credit_reset, user.last_credit_reset);
}

#[tokio::test]
async fn given_rejected_proof_when_submitted_then_profile_unchanged() {
    let h = harness(MockBackend::offline(), MockProvider::unavailable());
    let user = h.studio.load_profile(None).await.unwrap();

    let outcome = h
        .studio
        .submit_payment_proof(None, &user, &PaymentProof::text("PAGO PARA JOAO SILVA"))
        .await
        .unwrap();

    assert!(!outcome.verdict.verified);
    assert_eq!(outcome.profile, user);
    assert!(!h.studio.load_profile(None).await.unwrap().is_subscribed);
}

#[tokio::test]
async fn given_offline_register_then_login_when_backend_still_down_then_same_profile() {
    // Given
    let h = harness(MockBackend::offline(), MockProvider::new());
    let request = maca_client::RegistrationRequest {
        email: "ana@loja.com".to_string(),
        password: "segredo".to_string(),
        ..Default::default()
    };
    let (_, registered) = h.studio.register(&request).await.unwrap();

    // When
    let (session, logged_in) = h.studio.login("ana@loja.com", "segredo").await.unwrap();

    // Then
    assert_eq!(session, Session::Offline);
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(h.studio.session().unwrap(), Some(Session::Offline));
    assert_eq!(h.backend.updates.lock().unwrap().len(), 0);
}
