//! Phone sign-in flow
//!
//! Validates a user's phone number and consent flag, delegates OTP delivery
//! to an external verification provider, and exchanges proof of phone
//! ownership for a signed-in session.
//!
//! The provider is behind the [`BaseAuthProvider`] trait; production wiring
//! uses [`TwilioAuthProvider`], tests use [`testing::MockAuthProvider`].

pub mod adapter;
pub mod config;
pub mod error;
pub mod session;
pub mod submission;
pub mod testing;
pub mod traits;
pub mod types;
pub mod verification;

pub use adapter::TwilioAuthProvider;
pub use config::Config;
pub use error::AuthFlowError;
pub use session::{Claims, JwtService, Session};
pub use submission::{PhoneSubmissionController, VERIFICATION_TIMEOUT};
pub use traits::BaseAuthProvider;
pub use types::{AuthUser, Credential, Outcome, SubmissionState, VerificationStart};
pub use verification::CodeVerificationController;
