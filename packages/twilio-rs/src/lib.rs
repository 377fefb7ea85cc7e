use std::collections::HashMap;
use std::time::Duration;

pub mod models;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{ApiErrorBody, Verification, VerificationCheck};

#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("request to Twilio failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Twilio returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse Twilio response: {0}")]
    Parse(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub service_id: String,
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
    client: Client,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    /// Start a verification: Twilio generates an OTP and delivers it to the
    /// recipient. The returned resource's `sid` correlates this send with a
    /// later [`check_verification`](Self::check_verification) call.
    ///
    /// `timeout` bounds the HTTP round trip, not the OTP's validity window.
    pub async fn send_verification(
        &self,
        recipient: &str,
        timeout: Duration,
    ) -> Result<Verification, TwilioError> {
        let url = format!(
            "https://verify.twilio.com/v2/Services/{serv_id}/Verifications",
            serv_id = self.options.service_id
        );

        let mut form_body: HashMap<&str, String> = HashMap::new();
        form_body.insert("To", recipient.to_string());
        form_body.insert("Channel", channel_for(recipient).to_string());

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .timeout(timeout)
            .form(&form_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response).await);
        }

        let verification = response
            .json::<Verification>()
            .await
            .map_err(TwilioError::Parse)?;
        debug!(
            sid = %verification.sid,
            channel = %verification.channel,
            "verification started"
        );
        Ok(verification)
    }

    /// Check a user-supplied code against a previously started verification,
    /// addressed by its `sid`.
    pub async fn check_verification(
        &self,
        verification_sid: &str,
        code: &str,
    ) -> Result<VerificationCheck, TwilioError> {
        let url = format!(
            "https://verify.twilio.com/v2/Services/{serv_id}/VerificationCheck",
            serv_id = self.options.service_id,
        );

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("VerificationSid", verification_sid);
        form_body.insert("Code", code);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response).await);
        }

        response
            .json::<VerificationCheck>()
            .await
            .map_err(TwilioError::Parse)
    }
}

async fn api_error(status: u16, response: reqwest::Response) -> TwilioError {
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body
            .message
            .unwrap_or_else(|| "unknown Twilio error".to_string()),
        Err(_) => "unknown Twilio error".to_string(),
    };
    error!(status, %message, "Twilio API error");
    TwilioError::Api { status, message }
}

/// Twilio can deliver codes over email as well as SMS.
fn channel_for(recipient: &str) -> &'static str {
    if recipient.contains('@') {
        "email"
    } else {
        "sms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_recipients_use_email_channel() {
        assert_eq!(channel_for("user@example.com"), "email");
        assert_eq!(channel_for("+15551234567"), "sms");
    }
}
