//! Outbound e-mail relay.
//!
//! `EmailGateway` is the seam between the contact form and the delivery
//! provider. `EmailJsGateway` talks to the EmailJS REST API with a blocking
//! client; it is always called from a background thread.

use std::time::Duration;

use serde::Serialize;

use crate::config::EmailJsConfig;

/// A contact-form submission as sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Local submission time, human readable.
    pub time: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("email provider is not configured (missing {0})")]
    NotConfigured(&'static str),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// Delivers a message. Exactly one attempt per call.
pub trait EmailGateway: Send + Sync {
    fn send(&self, message: &ContactMessage) -> Result<(), GatewayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// EmailJS REST relay (`POST /api/v1.0/email/send`).
pub struct EmailJsGateway {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    timeout: Duration,
}

impl EmailJsGateway {
    pub fn new(config: &EmailJsConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Name of the first missing identifier, if any.
    pub fn missing_identifier(&self) -> Option<&'static str> {
        if self.service_id.trim().is_empty() {
            Some("service_id")
        } else if self.template_id.trim().is_empty() {
            Some("template_id")
        } else if self.public_key.trim().is_empty() {
            Some("public_key")
        } else {
            None
        }
    }

    fn request_body(&self, message: &ContactMessage) -> Result<String, GatewayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: message,
        };
        serde_json::to_string(&body).map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

impl EmailGateway for EmailJsGateway {
    fn send(&self, message: &ContactMessage) -> Result<(), GatewayError> {
        if let Some(missing) = self.missing_identifier() {
            return Err(GatewayError::NotConfigured(missing));
        }

        let body = self.request_body(message)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(GatewayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
