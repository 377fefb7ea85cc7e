//! Integration tests for the code verification controller.
//!
//! Tests the code-entry half of the flow:
//! - Local validation of the typed code
//! - Approved checks exchanging the credential for a session
//! - Rejected codes and failed exchanges surfacing provider messages

use std::sync::Arc;

use phone_auth::testing::MockAuthProvider;
use phone_auth::{AuthFlowError, CodeVerificationController};

fn controller(provider: &Arc<MockAuthProvider>) -> CodeVerificationController {
    CodeVerificationController::new(provider.clone())
}

#[tokio::test]
async fn empty_code_is_rejected_without_provider_call() {
    let provider = Arc::new(MockAuthProvider::new());
    let result = controller(&provider).verify("vid-123", "   ").await;

    assert!(matches!(result, Err(AuthFlowError::MissingCode)));
    assert!(provider.check_calls().is_empty());
}

#[tokio::test]
async fn approved_code_yields_session_for_the_verified_phone() {
    let provider = Arc::new(MockAuthProvider::new());
    let session = controller(&provider).verify("vid-123", "123456").await.unwrap();

    assert_eq!(session.user.phone_number, "+15551234567");

    let checks = provider.check_calls();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].verification_id, "vid-123");
    assert_eq!(checks[0].code, "123456");
}

#[tokio::test]
async fn code_is_trimmed_before_dispatch() {
    let provider = Arc::new(MockAuthProvider::new());
    controller(&provider).verify("vid-123", " 123456 ").await.unwrap();

    assert_eq!(provider.check_calls()[0].code, "123456");
}

#[tokio::test]
async fn rejected_code_surfaces_provider_message() {
    let provider = Arc::new(MockAuthProvider::new().with_check_rejected("invalid verification code"));
    let err = controller(&provider)
        .verify("vid-123", "000000")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthFlowError::Provider(m) if m == "invalid verification code"));
    // A rejected check never reaches the sign-in exchange
    assert!(provider.sign_in_calls().is_empty());
}

#[tokio::test]
async fn failed_exchange_surfaces_provider_message() {
    let provider = Arc::new(MockAuthProvider::new().with_sign_in_failure("session exchange rejected"));
    let err = controller(&provider)
        .verify("vid-123", "123456")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthFlowError::Provider(m) if m == "session exchange rejected"));
}
