// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod nearby_service;
pub mod ola_maps_client;
pub mod search_service;

#[cfg(test)]
pub mod stub;

pub use nearby_service::*;
pub use ola_maps_client::*;
pub use search_service::*;
