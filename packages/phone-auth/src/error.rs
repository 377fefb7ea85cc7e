use thiserror::Error;

/// Errors surfaced to the user by the sign-in flow.
///
/// Validation errors are produced locally before any provider call;
/// provider errors carry the external service's message verbatim. Neither
/// is fatal: every error path returns the user to the same screen to retry
/// manually.
#[derive(Debug, Clone, Error)]
pub enum AuthFlowError {
    #[error("missing phone number or consent")]
    MissingInput,

    #[error("missing verification code")]
    MissingCode,

    #[error("{0}")]
    Provider(String),
}

impl AuthFlowError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingInput | Self::MissingCode)
    }
}
