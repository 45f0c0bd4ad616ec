// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::{json, Value};
use thiserror::Error;

/// Remediation shown to clients when the API key rejects the caller's domain
pub const DOMAIN_HINT: &str =
    "Domain not whitelisted. Please add your domain to the Ola Maps API key settings.";

/// Failures talking to the upstream places API
/// DOCUMENTATION: Produced by the places client, consumed either by the
/// fail-open aggregation (logged and dropped) or by handlers (wrapped in
/// ProxyError::Upstream)
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: Value },

    #[error("API returned status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: String,
        message: Option<String>,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Photo lookup returned no URL")]
    MissingPhotoUrl,
}

impl UpstreamError {
    /// Payload surfaced to clients as `details`
    /// DOCUMENTATION: Upstream JSON body when one came back, otherwise the error text
    pub fn details(&self) -> Value {
        match self {
            UpstreamError::Status { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }

    /// Human-readable message reported by the upstream API, if any
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            UpstreamError::Status { body, .. } => body.get("message").and_then(Value::as_str),
            UpstreamError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the upstream refused the request because of referrer/domain allow-listing
    pub fn is_domain_restricted(&self) -> bool {
        self.upstream_message()
            .map(|msg| msg.contains("Domain") || msg.contains("not allowed"))
            .unwrap_or(false)
    }

    /// Remediation hint for the client
    pub fn hint(&self) -> Option<&'static str> {
        self.upstream_message()
            .filter(|msg| msg.contains("Domain"))
            .map(|_| DOMAIN_HINT)
    }
}

/// Application-specific error types
/// DOCUMENTATION: Boundary errors returned by handlers
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{context}")]
    Upstream {
        context: String,
        #[source]
        source: UpstreamError,
    },

    #[error("{context}")]
    Configuration { context: String, details: String },

    #[error("Not Found")]
    NotFound,
}

/// Convert ProxyError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ProxyError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ProxyError::InvalidInput(_) | ProxyError::ValidationError(_) => json!({
                "error": self.to_string()
            }),
            ProxyError::Upstream { context, source } => {
                let mut body = json!({
                    "error": context,
                    "details": source.details()
                });
                if let Some(hint) = source.hint() {
                    body["hint"] = Value::String(hint.to_string());
                }
                body
            }
            ProxyError::Configuration { context, details } => json!({
                "error": context,
                "details": details
            }),
            ProxyError::NotFound => json!({ "detail": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProxyError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}
