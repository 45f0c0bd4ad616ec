// src/handlers/fallback.rs
// DOCUMENTATION: Catch-all responses
// PURPOSE: JSON 404s and JSON body errors in the proxy's error shape

use crate::errors::ProxyError;
use actix_web::{error::JsonPayloadError, web, Error, HttpRequest};

/// Any unmatched route or method
pub async fn not_found(req: HttpRequest) -> Result<&'static str, ProxyError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(ProxyError::NotFound)
}

/// Malformed or missing JSON bodies become 400 `{ error }`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::warn!("Rejected request body: {}", err);
    ProxyError::InvalidInput(format!("Invalid JSON body: {}", err)).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
