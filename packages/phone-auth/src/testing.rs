// MockAuthProvider - scripted provider for tests
//
// Records every call so tests can assert on dispatch counts and arguments.
// Scripted responses are consumed in order; when a script runs out the mock
// falls back to a benign default (code sent / approved / signed in).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::session::Session;
use crate::traits::BaseAuthProvider;
use crate::types::{AuthUser, Credential, VerificationStart};

/// Arguments captured from an initiation call
#[derive(Debug, Clone)]
pub struct InitiateCall {
    pub phone_number: String,
    pub timeout: Duration,
}

/// Arguments captured from a code check call
#[derive(Debug, Clone)]
pub struct CheckCall {
    pub verification_id: String,
    pub code: String,
}

enum StartScript {
    CodeSent { verification_id: String },
    AutoVerified,
    Fail(String),
    /// Never resolves; drives the timeout path.
    Hang,
}

enum CheckScript {
    Approve,
    Reject(String),
}

enum SignInScript {
    Succeed,
    Fail(String),
}

pub struct MockAuthProvider {
    start_scripts: Arc<Mutex<Vec<StartScript>>>,
    check_scripts: Arc<Mutex<Vec<CheckScript>>>,
    sign_in_scripts: Arc<Mutex<Vec<SignInScript>>>,
    initiate_calls: Arc<Mutex<Vec<InitiateCall>>>,
    check_calls: Arc<Mutex<Vec<CheckCall>>>,
    sign_in_calls: Arc<Mutex<Vec<Credential>>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self {
            start_scripts: Arc::new(Mutex::new(Vec::new())),
            check_scripts: Arc::new(Mutex::new(Vec::new())),
            sign_in_scripts: Arc::new(Mutex::new(Vec::new())),
            initiate_calls: Arc::new(Mutex::new(Vec::new())),
            check_calls: Arc::new(Mutex::new(Vec::new())),
            sign_in_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the next initiation to dispatch a code with this id
    pub fn with_code_sent(self, verification_id: &str) -> Self {
        self.start_scripts
            .lock()
            .unwrap()
            .push(StartScript::CodeSent {
                verification_id: verification_id.to_string(),
            });
        self
    }

    /// Script the next initiation to auto-verify without code entry
    pub fn with_auto_verified(self) -> Self {
        self.start_scripts
            .lock()
            .unwrap()
            .push(StartScript::AutoVerified);
        self
    }

    /// Script the next initiation to fail with this message
    pub fn with_failure(self, message: &str) -> Self {
        self.start_scripts
            .lock()
            .unwrap()
            .push(StartScript::Fail(message.to_string()));
        self
    }

    /// Script the next initiation to hang past any timeout
    pub fn with_hang(self) -> Self {
        self.start_scripts.lock().unwrap().push(StartScript::Hang);
        self
    }

    /// Script the next code check to be rejected with this message
    pub fn with_check_rejected(self, message: &str) -> Self {
        self.check_scripts
            .lock()
            .unwrap()
            .push(CheckScript::Reject(message.to_string()));
        self
    }

    /// Script the next sign-in exchange to fail with this message
    pub fn with_sign_in_failure(self, message: &str) -> Self {
        self.sign_in_scripts
            .lock()
            .unwrap()
            .push(SignInScript::Fail(message.to_string()));
        self
    }

    /// Get all initiation calls with their arguments
    pub fn initiate_calls(&self) -> Vec<InitiateCall> {
        self.initiate_calls.lock().unwrap().clone()
    }

    /// Get all code check calls with their arguments
    pub fn check_calls(&self) -> Vec<CheckCall> {
        self.check_calls.lock().unwrap().clone()
    }

    /// Get all credentials passed to sign-in
    pub fn sign_in_calls(&self) -> Vec<Credential> {
        self.sign_in_calls.lock().unwrap().clone()
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAuthProvider for MockAuthProvider {
    async fn initiate_phone_verification(
        &self,
        phone_number: &str,
        timeout: Duration,
    ) -> Result<VerificationStart> {
        self.initiate_calls.lock().unwrap().push(InitiateCall {
            phone_number: phone_number.to_string(),
            timeout,
        });

        let script = {
            let mut scripts = self.start_scripts.lock().unwrap();
            if scripts.is_empty() {
                None
            } else {
                Some(scripts.remove(0))
            }
        };

        match script {
            None => Ok(VerificationStart::CodeSent {
                verification_id: format!("VE{}", Uuid::new_v4().simple()),
                resend_token: None,
            }),
            Some(StartScript::CodeSent { verification_id }) => Ok(VerificationStart::CodeSent {
                verification_id,
                resend_token: None,
            }),
            Some(StartScript::AutoVerified) => {
                Ok(VerificationStart::AutoVerified(Credential {
                    phone_number: phone_number.to_string(),
                    verification_token: format!("VE{}", Uuid::new_v4().simple()),
                }))
            }
            Some(StartScript::Fail(message)) => Err(anyhow::anyhow!(message)),
            Some(StartScript::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }

    async fn check_code(&self, verification_id: &str, code: &str) -> Result<Credential> {
        self.check_calls.lock().unwrap().push(CheckCall {
            verification_id: verification_id.to_string(),
            code: code.to_string(),
        });

        let script = {
            let mut scripts = self.check_scripts.lock().unwrap();
            if scripts.is_empty() {
                None
            } else {
                Some(scripts.remove(0))
            }
        };

        match script {
            None | Some(CheckScript::Approve) => Ok(Credential {
                phone_number: "+15551234567".to_string(),
                verification_token: verification_id.to_string(),
            }),
            Some(CheckScript::Reject(message)) => Err(anyhow::anyhow!(message)),
        }
    }

    async fn complete_sign_in(&self, credential: Credential) -> Result<Session> {
        self.sign_in_calls.lock().unwrap().push(credential.clone());

        let script = {
            let mut scripts = self.sign_in_scripts.lock().unwrap();
            if scripts.is_empty() {
                None
            } else {
                Some(scripts.remove(0))
            }
        };

        match script {
            None | Some(SignInScript::Succeed) => Ok(Session {
                token: "mock-token".to_string(),
                user: AuthUser {
                    member_id: Uuid::new_v4(),
                    phone_number: credential.phone_number,
                    is_admin: false,
                },
            }),
            Some(SignInScript::Fail(message)) => Err(anyhow::anyhow!(message)),
        }
    }
}
