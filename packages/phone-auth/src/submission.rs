//! Phone submission controller
//!
//! One submission runs `Idle → Validating → {Rejected | Dispatching →
//! {SignedIn, Failed, AwaitingCode, TimedOut}}`. Every state except
//! `Dispatching` is terminal and no state is retained across submissions:
//! a failed or timed-out attempt requires the user to resubmit manually.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::AuthFlowError;
use crate::traits::BaseAuthProvider;
use crate::types::{Outcome, SubmissionState, VerificationStart};

/// Window the provider gets to resolve an initiation request.
pub const VERIFICATION_TIMEOUT: Duration = Duration::from_secs(60);

pub struct PhoneSubmissionController {
    provider: Arc<dyn BaseAuthProvider>,
    timeout: Duration,
}

impl PhoneSubmissionController {
    pub fn new(provider: Arc<dyn BaseAuthProvider>) -> Self {
        Self {
            provider,
            timeout: VERIFICATION_TIMEOUT,
        }
    }

    /// Override the default verification window.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the submission and, if it passes, issue exactly one
    /// asynchronous request to the verification provider.
    ///
    /// Validation is local and synchronous: an empty phone number or a
    /// missing consent flag fails without any provider call. There is no
    /// retry policy and no dedup across calls; each `submit` stands alone.
    pub async fn submit(&self, state: &SubmissionState) -> Result<Outcome, AuthFlowError> {
        if !state.can_submit() {
            debug!("submission rejected before dispatch");
            return Err(AuthFlowError::MissingInput);
        }

        debug!(phone_number = %state.phone_number, "initiating phone verification");
        let started = timeout(
            self.timeout,
            self.provider
                .initiate_phone_verification(&state.phone_number, self.timeout),
        )
        .await;

        match started {
            Err(_elapsed) => {
                warn!(
                    phone_number = %state.phone_number,
                    timeout_secs = self.timeout.as_secs(),
                    "verification window elapsed without a resolution"
                );
                Ok(Outcome::TimedOut)
            }
            Ok(Err(e)) => Err(AuthFlowError::Provider(e.to_string())),
            Ok(Ok(VerificationStart::AutoVerified(credential))) => {
                let session = self
                    .provider
                    .complete_sign_in(credential)
                    .await
                    .map_err(|e| AuthFlowError::Provider(e.to_string()))?;
                info!(
                    member_id = %session.user.member_id,
                    "phone ownership proven without code entry"
                );
                Ok(Outcome::SignedIn(session))
            }
            Ok(Ok(VerificationStart::CodeSent {
                verification_id,
                resend_token,
            })) => {
                debug!(
                    verification_id = %verification_id,
                    has_resend_token = resend_token.is_some(),
                    "OTP dispatched"
                );
                Ok(Outcome::AwaitingCode { verification_id })
            }
        }
    }
}
