// src/models/request.rs
// DOCUMENTATION: Request and response envelopes for the HTTP endpoints
// PURPOSE: Deserialize and validate inbound JSON bodies

use serde::{Deserialize, Serialize};
use serde_json::Number;
use validator::{Validate, ValidationErrors};

/// Radius used when the caller omits one, in meters
pub const DEFAULT_RADIUS_METERS: u32 = 1000;

/// Results requested from each category search
pub const CATEGORY_RESULT_LIMIT: u32 = 10;

/// Body of POST /chat
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(
        required(message = "Message is required"),
        length(min = 1, message = "Message is required")
    )]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The query text, if one was actually supplied
    pub fn query(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

/// Body of POST /api/nearby
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NearbyRequest {
    /// "lat,lng"
    #[serde(default)]
    #[validate(
        required(message = "Location is required"),
        length(min = 1, message = "Location is required")
    )]
    pub location: Option<String>,

    /// Search radius in meters, forwarded upstream exactly as sent
    #[serde(default)]
    pub radius: Option<Number>,

    /// Upstream type filter applied to every category
    #[serde(default)]
    pub types: Option<String>,
}

impl NearbyRequest {
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
    }

    pub fn radius(&self) -> Number {
        self.radius
            .clone()
            .unwrap_or_else(|| Number::from(DEFAULT_RADIUS_METERS))
    }
}

/// First human-readable message out of a validation failure
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Successful response envelope: `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
