//! Server functions for authentication
//!
//! These run on the server: they drive the sign-in flow controllers and
//! manage the session cookie.

use dioxus::prelude::*;

use crate::types::{AuthUser, SendCodeOutcome};

/// Submit a phone number for verification.
///
/// Validation (non-empty number, consent given) happens in the flow
/// controller before any provider call; its errors come back as server
/// function errors with the user-facing message.
#[server]
pub async fn send_verification_code(
    phone_number: String,
    consent_given: bool,
) -> Result<SendCodeOutcome, ServerFnError> {
    use phone_auth::{Outcome, PhoneSubmissionController, SubmissionState};

    let controller = PhoneSubmissionController::new(auth_provider()?);
    let state = SubmissionState::new(phone_number, consent_given);

    match controller.submit(&state).await {
        Ok(Outcome::SignedIn(session)) => {
            set_session_user(&auth_user(session.user)).await?;
            Ok(SendCodeOutcome::SignedIn)
        }
        Ok(Outcome::AwaitingCode { verification_id }) => {
            Ok(SendCodeOutcome::AwaitingCode { verification_id })
        }
        Ok(Outcome::TimedOut) => Ok(SendCodeOutcome::TimedOut),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

/// Verify a code and establish a session
#[server]
pub async fn verify_code(
    verification_id: String,
    code: String,
) -> Result<AuthUser, ServerFnError> {
    use phone_auth::CodeVerificationController;

    let controller = CodeVerificationController::new(auth_provider()?);
    let session = controller
        .verify(&verification_id, &code)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth_user(session.user);
    set_session_user(&user).await?;
    Ok(user)
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn auth_provider() -> Result<std::sync::Arc<phone_auth::TwilioAuthProvider>, ServerFnError> {
    use std::sync::Arc;

    use phone_auth::{Config, JwtService, TwilioAuthProvider};
    use twilio::{TwilioOptions, TwilioService};

    let config = Config::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;

    let twilio = Arc::new(TwilioService::new(TwilioOptions {
        account_sid: config.twilio_account_sid,
        auth_token: config.twilio_auth_token,
        service_id: config.twilio_verify_service_sid,
    }));
    let jwt = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer));

    Ok(Arc::new(TwilioAuthProvider::new(twilio, jwt)))
}

#[cfg(feature = "server")]
fn auth_user(user: phone_auth::AuthUser) -> AuthUser {
    AuthUser {
        member_id: user.member_id,
        phone_number: user.phone_number,
        is_admin: user.is_admin,
    }
}

#[cfg(feature = "server")]
async fn set_session_user(user: &AuthUser) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("user", user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get("user")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}
