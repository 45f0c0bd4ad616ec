// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, build the upstream client, start HTTP server

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{OlaMapsClient, PlacesApi};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting Ola Maps proxy...");
    log::info!("Environment: {}", config.environment);
    log::info!("Upstream: {}", config.ola_maps_base_url);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the upstream client from explicit configuration
    let api: Arc<dyn PlacesApi> = Arc::new(OlaMapsClient::from_config(&config));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (upstream client and config)
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(middleware::cors_policy())
            .wrap(actix_web::middleware::from_fn(middleware::fixed_cors_headers))
            .wrap(actix_web::middleware::Compress::default())
            .wrap(Logger::default())
            // Routes
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    log::info!("Server stopped");
    Ok(())
}
