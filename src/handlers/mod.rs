// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the route table

pub mod caller;
pub mod chat;
pub mod fallback;
pub mod health;
pub mod nearby;

pub use chat::config as chat_config;
pub use fallback::{json_config, not_found};
pub use health::config as health_config;
pub use nearby::config as nearby_config;

use actix_web::web;

/// Register every route plus the JSON 404 fallback
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    health_config(cfg);
    chat_config(cfg);
    nearby_config(cfg);
    cfg.default_service(web::to(not_found));
}

/// App wired like production, backed by a recording stub
#[cfg(test)]
pub(crate) fn test_app(
    api: std::sync::Arc<crate::services::stub::StubPlacesApi>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with_config(api, crate::config::Config::for_tests())
}

/// Same as `test_app` with a caller-supplied configuration
#[cfg(test)]
pub(crate) fn test_app_with_config(
    api: std::sync::Arc<crate::services::stub::StubPlacesApi>,
    config: crate::config::Config,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    use crate::services::PlacesApi;
    use std::sync::Arc;

    let api: Arc<dyn PlacesApi> = api;
    actix_web::App::new()
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(config))
        .wrap(crate::middleware::cors_policy())
        .wrap(actix_web::middleware::from_fn(
            crate::middleware::fixed_cors_headers,
        ))
        .configure(configure)
}
