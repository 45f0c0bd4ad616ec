// src/handlers/chat.rs
// DOCUMENTATION: HTTP handler for free-text place search
// PURPOSE: Validate the query, forward it upstream, map failures to the error shape

use crate::config::Config;
use crate::errors::ProxyError;
use crate::models::{validation_message, ApiResponse, ChatRequest};
use crate::services::{CallerContext, PlacesApi, SearchService};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// POST /chat
/// Forward a search query to autocomplete
pub async fn chat(
    api: web::Data<Arc<dyn PlacesApi>>,
    config: web::Data<Config>,
    caller: CallerContext,
    req: web::Json<ChatRequest>,
) -> Result<impl Responder, ProxyError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(ProxyError::ValidationError(validation_message(&e)));
    }
    let message = req
        .query()
        .ok_or_else(|| ProxyError::InvalidInput("Message is required".to_string()))?;

    // Same wording as an upstream rejection of a missing key
    if config.ola_maps_api_key.is_empty() {
        return Err(ProxyError::Configuration {
            context: "Failed to fetch map data".to_string(),
            details: "OLA_MAPS_API_KEY is not configured".to_string(),
        });
    }

    log::info!(
        "Search requested: {:?} (origin: {})",
        message,
        caller.origin.as_deref().unwrap_or("default")
    );

    let data = SearchService::search(api.get_ref().as_ref(), message, &caller)
        .await
        .map_err(|e| {
            log::error!("OLA MAPS ERROR: {}", e.details());
            if e.is_domain_restricted() {
                log::error!("Domain restriction error detected");
                log::error!("Add this domain to the Ola Maps API key whitelist in the dashboard, or make sure the Referer/Origin header matches a whitelisted domain");
            }
            ProxyError::Upstream {
                context: "Failed to fetch map data".to_string(),
                source: e,
            }
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(data)))
}

/// Configuration for search routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .route(web::post().to(chat))
            .default_service(web::to(super::not_found)),
    );
}
