//! Types shared between the client and the server functions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user, as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub member_id: Uuid,
    pub phone_number: String,
    pub is_admin: bool,
}

/// How a phone submission resolved.
///
/// Failures travel as server function errors; these are the non-error
/// resolutions the client routes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SendCodeOutcome {
    /// The provider proved ownership without code entry.
    SignedIn,
    /// An OTP is on its way; route to the code-entry screen.
    AwaitingCode { verification_id: String },
    /// The verification window lapsed with no resolution.
    TimedOut,
}
