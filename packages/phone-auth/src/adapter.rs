//! Twilio Verify adapter for the provider trait

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;
use twilio::TwilioService;
use uuid::Uuid;

use crate::session::{JwtService, Session};
use crate::traits::BaseAuthProvider;
use crate::types::{AuthUser, Credential, VerificationStart};

/// Wrapper around TwilioService that implements the BaseAuthProvider trait.
///
/// Twilio Verify owns OTP generation, delivery and throttling; this adapter
/// only maps its resources onto the flow's types and mints the session JWT
/// once ownership is proven.
pub struct TwilioAuthProvider {
    twilio: Arc<TwilioService>,
    jwt: Arc<JwtService>,
}

impl TwilioAuthProvider {
    pub fn new(twilio: Arc<TwilioService>, jwt: Arc<JwtService>) -> Self {
        Self { twilio, jwt }
    }
}

#[async_trait]
impl BaseAuthProvider for TwilioAuthProvider {
    async fn initiate_phone_verification(
        &self,
        phone_number: &str,
        timeout: Duration,
    ) -> Result<VerificationStart> {
        // Twilio has no silent device-attestation path, so initiation
        // always resolves to a dispatched code.
        let verification = self.twilio.send_verification(phone_number, timeout).await?;
        Ok(VerificationStart::CodeSent {
            verification_id: verification.sid,
            resend_token: None,
        })
    }

    async fn check_code(&self, verification_id: &str, code: &str) -> Result<Credential> {
        let check = self.twilio.check_verification(verification_id, code).await?;
        if !check.is_approved() {
            anyhow::bail!("invalid verification code");
        }
        debug!(verification_id = %verification_id, "verification approved");
        Ok(Credential {
            phone_number: check.to,
            verification_token: verification_id.to_string(),
        })
    }

    /// Exchange an approved credential for a JWT-backed session.
    ///
    /// The credential must come from [`check_code`](Self::check_code) or an
    /// auto-verified initiation; nothing re-checks it here.
    async fn complete_sign_in(&self, credential: Credential) -> Result<Session> {
        let user = AuthUser {
            member_id: member_id_for_phone(&credential.phone_number),
            phone_number: credential.phone_number,
            is_admin: false,
        };
        let token = self
            .jwt
            .create_token(user.member_id, user.phone_number.clone(), user.is_admin)?;
        Ok(Session { token, user })
    }
}

/// Derive a stable member id from a phone number.
///
/// The flow owns no user store, so the session subject is the first half of
/// the phone number's SHA-256 digest interpreted as a UUID. The same phone
/// always signs in as the same member.
pub fn member_id_for_phone(phone_number: &str) -> Uuid {
    let mut hasher = Sha256::new();
    hasher.update(phone_number.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_is_stable_per_phone() {
        let a = member_id_for_phone("+15551234567");
        let b = member_id_for_phone("+15551234567");
        let c = member_id_for_phone("+15557654321");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
