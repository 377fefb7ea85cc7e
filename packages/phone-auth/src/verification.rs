//! Code verification controller
//!
//! Second half of the flow: the user types the OTP they received and the
//! provider checks it against the pending verification. An approved check
//! yields a credential that is exchanged for a session.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AuthFlowError;
use crate::session::Session;
use crate::traits::BaseAuthProvider;

pub struct CodeVerificationController {
    provider: Arc<dyn BaseAuthProvider>,
}

impl CodeVerificationController {
    pub fn new(provider: Arc<dyn BaseAuthProvider>) -> Self {
        Self { provider }
    }

    /// Check a user-typed code and sign in on approval.
    ///
    /// An empty code fails locally without a provider call. A rejected code
    /// or provider error is surfaced verbatim; the user may retype and
    /// retry manually.
    pub async fn verify(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<Session, AuthFlowError> {
        let code = code.trim();
        if code.is_empty() {
            debug!(verification_id = %verification_id, "empty code rejected before dispatch");
            return Err(AuthFlowError::MissingCode);
        }

        let credential = self
            .provider
            .check_code(verification_id, code)
            .await
            .map_err(|e| AuthFlowError::Provider(e.to_string()))?;

        let session = self
            .provider
            .complete_sign_in(credential)
            .await
            .map_err(|e| AuthFlowError::Provider(e.to_string()))?;

        info!(member_id = %session.user.member_id, "code verified, signed in");
        Ok(session)
    }
}
