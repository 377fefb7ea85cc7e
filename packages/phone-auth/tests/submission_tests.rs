//! Integration tests for the phone submission controller.
//!
//! Tests all submission paths:
//! - Local validation (empty phone / missing consent) blocking dispatch
//! - Single dispatch with the 60-second verification window
//! - Code-sent, failure, auto-verified and timeout resolutions
//! - Absence of a double-submission guard

use std::sync::Arc;
use std::time::Duration;

use phone_auth::testing::MockAuthProvider;
use phone_auth::{AuthFlowError, Outcome, PhoneSubmissionController, SubmissionState};

// ============================================================================
// Test Helpers
// ============================================================================

fn controller(provider: &Arc<MockAuthProvider>) -> PhoneSubmissionController {
    PhoneSubmissionController::new(provider.clone())
}

fn valid_state() -> SubmissionState {
    SubmissionState::new("+15551234567", true)
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn empty_phone_is_rejected_without_provider_call() {
    let provider = Arc::new(MockAuthProvider::new());
    let result = controller(&provider)
        .submit(&SubmissionState::new("", true))
        .await;

    match result {
        Err(AuthFlowError::MissingInput) => {}
        other => panic!("expected MissingInput, got {:?}", other),
    }
    assert!(provider.initiate_calls().is_empty());
}

#[tokio::test]
async fn missing_consent_is_rejected_without_provider_call() {
    let provider = Arc::new(MockAuthProvider::new());
    let result = controller(&provider)
        .submit(&SubmissionState::new("+15551234567", false))
        .await;

    assert!(matches!(result, Err(AuthFlowError::MissingInput)));
    assert!(provider.initiate_calls().is_empty());
}

#[tokio::test]
async fn validation_error_carries_user_facing_message() {
    let provider = Arc::new(MockAuthProvider::new());
    let err = controller(&provider)
        .submit(&SubmissionState::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "missing phone number or consent");
    assert!(err.is_validation());
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn valid_submission_dispatches_exactly_one_request() {
    let provider = Arc::new(MockAuthProvider::new());
    controller(&provider).submit(&valid_state()).await.unwrap();

    let calls = provider.initiate_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].phone_number, "+15551234567");
    assert_eq!(calls[0].timeout, Duration::from_secs(60));
}

#[tokio::test]
async fn code_sent_resolves_to_awaiting_code() {
    let provider = Arc::new(MockAuthProvider::new().with_code_sent("vid-123"));
    let outcome = controller(&provider).submit(&valid_state()).await.unwrap();

    match outcome {
        Outcome::AwaitingCode { verification_id } => assert_eq!(verification_id, "vid-123"),
        other => panic!("expected AwaitingCode, got {:?}", other),
    }
}

#[tokio::test]
async fn provider_failure_is_surfaced_verbatim() {
    let provider = Arc::new(MockAuthProvider::new().with_failure("invalid number"));
    let err = controller(&provider)
        .submit(&valid_state())
        .await
        .unwrap_err();

    match err {
        AuthFlowError::Provider(message) => assert_eq!(message, "invalid number"),
        other => panic!("expected Provider error, got {:?}", other),
    }
    // Failure never reaches the sign-in exchange
    assert!(provider.sign_in_calls().is_empty());
}

#[tokio::test]
async fn auto_verified_exchanges_credential_for_session() {
    let provider = Arc::new(MockAuthProvider::new().with_auto_verified());
    let outcome = controller(&provider).submit(&valid_state()).await.unwrap();

    match outcome {
        Outcome::SignedIn(session) => {
            assert_eq!(session.user.phone_number, "+15551234567");
        }
        other => panic!("expected SignedIn, got {:?}", other),
    }

    let exchanges = provider.sign_in_calls();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].phone_number, "+15551234567");
}

#[tokio::test]
async fn sign_in_failure_after_auto_verify_is_surfaced() {
    let provider = Arc::new(
        MockAuthProvider::new()
            .with_auto_verified()
            .with_sign_in_failure("session exchange rejected"),
    );
    let err = controller(&provider)
        .submit(&valid_state())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthFlowError::Provider(m) if m == "session exchange rejected"));
}

// ============================================================================
// Timeout
// ============================================================================

#[tokio::test]
async fn unresolved_initiation_times_out() {
    let provider = Arc::new(MockAuthProvider::new().with_hang());
    let outcome = controller(&provider)
        .with_timeout(Duration::from_millis(50))
        .submit(&valid_state())
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::TimedOut));
    // The request was dispatched; only its resolution never arrived
    assert_eq!(provider.initiate_calls().len(), 1);
    assert!(provider.sign_in_calls().is_empty());
}

// ============================================================================
// Resubmission
// ============================================================================

#[tokio::test]
async fn identical_submissions_issue_independent_requests() {
    let provider = Arc::new(MockAuthProvider::new());
    let controller = controller(&provider);

    controller.submit(&valid_state()).await.unwrap();
    controller.submit(&valid_state()).await.unwrap();

    // No dedup or debounce across submissions
    let calls = provider.initiate_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].phone_number, calls[1].phone_number);
}
