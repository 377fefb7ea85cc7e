//! Response models for the Twilio Verify v2 API

use serde::Deserialize;

/// A verification resource, returned when an OTP is dispatched.
///
/// The `sid` is the opaque token that correlates this send with a later
/// check.
#[derive(Debug, Clone, Deserialize)]
pub struct Verification {
    pub sid: String,
    pub status: String,
    pub to: String,
    pub channel: String,
}

/// Result of checking a code against a verification.
///
/// `status` is `"approved"` when the code matched.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationCheck {
    pub status: String,
    pub to: String,
}

impl VerificationCheck {
    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }
}

/// Error body returned by the Twilio API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
}
