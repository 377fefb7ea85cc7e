// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The flow
// controllers own validation and outcome routing; implementations of these
// traits only talk to the external service.
//
// Naming convention: Base* for trait names (e.g. BaseAuthProvider)

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::session::Session;
use crate::types::{Credential, VerificationStart};

/// External verification provider. The provider owns code generation, SMS
/// dispatch, throttling and fraud detection; none of that is reimplemented
/// here.
#[async_trait]
pub trait BaseAuthProvider: Send + Sync {
    /// Ask the provider to prove ownership of a phone number, dispatching
    /// an OTP when silent verification is not possible.
    ///
    /// `timeout` bounds the provider's side of the exchange; the caller
    /// enforces the same bound on the whole call.
    async fn initiate_phone_verification(
        &self,
        phone_number: &str,
        timeout: Duration,
    ) -> Result<VerificationStart>;

    /// Check a user-typed code against a pending verification.
    async fn check_code(&self, verification_id: &str, code: &str) -> Result<Credential>;

    /// Exchange proof of phone ownership for an authenticated session.
    async fn complete_sign_in(&self, credential: Credential) -> Result<Session>;
}
