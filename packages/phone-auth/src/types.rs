//! Flow data types
//!
//! Everything here is transient: nothing is persisted by the flow itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::Session;

/// Transient state owned by the phone-input screen.
///
/// Created when the screen is shown, mutated on every keystroke or checkbox
/// toggle, discarded when the screen is dismissed or navigation occurs.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    pub phone_number: String,
    pub consent_given: bool,
}

impl SubmissionState {
    pub fn new(phone_number: impl Into<String>, consent_given: bool) -> Self {
        Self {
            phone_number: phone_number.into(),
            consent_given,
        }
    }

    /// An OTP request may be dispatched only when the phone number is
    /// non-empty and consent has been given.
    pub fn can_submit(&self) -> bool {
        !self.phone_number.is_empty() && self.consent_given
    }
}

/// Provider-issued proof of phone ownership, exchanged for a session.
#[derive(Debug, Clone)]
pub struct Credential {
    pub phone_number: String,
    pub verification_token: String,
}

/// How the provider resolved an initiation request.
#[derive(Debug, Clone)]
pub enum VerificationStart {
    /// Ownership was proven without user code entry (platform-level
    /// matching on the device).
    AutoVerified(Credential),

    /// An OTP was dispatched. The id correlates this send with a later
    /// code check; the resend token is optional and provider-specific.
    CodeSent {
        verification_id: String,
        resend_token: Option<String>,
    },
}

/// Terminal result of a phone submission.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Ownership was proven and the credential exchanged for a session.
    SignedIn(Session),

    /// An OTP is on its way; the caller routes to the code-entry screen
    /// with this id.
    AwaitingCode { verification_id: String },

    /// The verification window elapsed without a resolution. Callers leave
    /// the user on the input screen; resubmission is manual.
    TimedOut,
}

/// Authenticated user identity carried in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub member_id: Uuid,
    pub phone_number: String,
    pub is_admin: bool,
}
