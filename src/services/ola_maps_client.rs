// src/services/ola_maps_client.rs
// DOCUMENTATION: Ola Maps Places API client
// PURPOSE: Single-shot upstream calls carrying the API key and allow-listed origin headers

use crate::config::Config;
use crate::errors::UpstreamError;
use crate::models::PlaceResult;
use async_trait::async_trait;
use reqwest::header::{ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};

/// User agent sent upstream when the caller supplies none
pub const DEFAULT_USER_AGENT: &str = "OlaMaps-Client/1.0";

/// Static map rendering parameters attached to search predictions
const STATIC_MAP_ZOOM: u32 = 15;
const STATIC_MAP_SIZE: &str = "400x300";

/// Identity of the browser that called the proxy
/// DOCUMENTATION: Upstream keys are allow-listed per domain, so the caller's
/// origin is replayed as Referer/Origin on every outbound request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerContext {
    /// Value of the inbound Origin header, else Referer
    pub origin: Option<String>,
    /// Value of the inbound User-Agent header
    pub user_agent: Option<String>,
}

/// Parameters for one nearby search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbySearchParams {
    /// "lat,lng"
    pub location: String,
    /// Radius in meters, as the caller sent it
    pub radius: Number,
    /// Comma-separated upstream place types
    pub types: String,
    /// Maximum results
    pub limit: u32,
}

/// Upstream places operations used by the endpoints
/// DOCUMENTATION: Implemented by OlaMapsClient in production and by a
/// recording stub in tests
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Free-text autocomplete; returns the upstream JSON body as-is
    async fn autocomplete(&self, input: &str, caller: &CallerContext)
        -> Result<Value, UpstreamError>;

    /// Nearby search; returns the upstream predictions
    async fn nearby_search(
        &self,
        params: &NearbySearchParams,
        caller: &CallerContext,
    ) -> Result<Vec<PlaceResult>, UpstreamError>;

    /// Resolve a photo reference to a displayable URL
    async fn photo(&self, photo_reference: &str, caller: &CallerContext)
        -> Result<String, UpstreamError>;

    /// Static map image centered on the given coordinates
    fn static_map_url(&self, lat: f64, lng: f64) -> String;
}

/// Ola Maps API client
/// DOCUMENTATION: Handles authentication and API calls to Ola Maps Places
pub struct OlaMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Ola Maps API key
    api_key: String,
    /// Base URL for Ola Maps API
    base_url: String,
    /// Origin replayed upstream when the caller has none
    default_origin: String,
}

/// Response from Ola Maps Nearby Search
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    predictions: Vec<PlaceResult>,
    status: Option<String>,
    error_message: Option<String>,
}

/// Response from Ola Maps Photo lookup
#[derive(Debug, Deserialize)]
struct PhotoResponse {
    #[serde(default, rename = "photoUrls")]
    photo_urls: Vec<String>,
}

impl OlaMapsClient {
    /// Create new Ola Maps API client
    pub fn new(api_key: String, base_url: String, default_origin: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_origin,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.ola_maps_api_key.clone(),
            config.ola_maps_base_url.clone(),
            config.default_origin.clone(),
        )
    }

    /// Origin and user agent actually sent upstream for this caller
    fn outbound_identity<'a>(&'a self, caller: &'a CallerContext) -> (&'a str, &'a str) {
        (
            caller.origin.as_deref().unwrap_or(&self.default_origin),
            caller.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )
    }

    /// GET request with the API key and identity headers applied
    fn get(&self, path: &str, caller: &CallerContext) -> RequestBuilder {
        let (origin, user_agent) = self.outbound_identity(caller);
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .header(REFERER, origin)
            .header(ORIGIN, origin)
            .header(USER_AGENT, user_agent)
    }

    /// Send a request and decode the JSON body
    /// DOCUMENTATION: Non-2xx responses keep their body for diagnosis
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Ola Maps request failed: {}", e);
            UpstreamError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            log::error!("Ola Maps API error {}: {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            log::error!("Failed to parse Ola Maps response: {}", e);
            UpstreamError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl PlacesApi for OlaMapsClient {
    async fn autocomplete(
        &self,
        input: &str,
        caller: &CallerContext,
    ) -> Result<Value, UpstreamError> {
        log::debug!(
            "Ola Maps autocomplete: input={:?}, origin={}",
            input,
            self.outbound_identity(caller).0
        );

        let request = self
            .get("/places/v1/autocomplete", caller)
            .query(&[("input", input)]);
        self.send_json(request).await
    }

    async fn nearby_search(
        &self,
        params: &NearbySearchParams,
        caller: &CallerContext,
    ) -> Result<Vec<PlaceResult>, UpstreamError> {
        log::debug!(
            "Ola Maps nearby search: location={}, radius={}, types={}",
            params.location,
            params.radius,
            params.types
        );

        let request = self.get("/places/v1/nearbysearch", caller).query(&[
            ("layers", "venue".to_string()),
            ("types", params.types.clone()),
            ("location", params.location.clone()),
            ("radius", params.radius.to_string()),
            ("limit", params.limit.to_string()),
        ]);
        let api_response: NearbySearchResponse = self.send_json(request).await?;

        // Absent status is treated as success
        match api_response.status.as_deref().map(str::to_ascii_lowercase) {
            None => Ok(api_response.predictions),
            Some(status) if status == "ok" || status == "zero_results" => {
                log::debug!(
                    "Ola Maps nearby search returned {} results",
                    api_response.predictions.len()
                );
                Ok(api_response.predictions)
            }
            Some(status) => {
                log::error!(
                    "Ola Maps nearby search unexpected status {}: {:?}",
                    status,
                    api_response.error_message
                );
                Err(UpstreamError::Rejected {
                    status,
                    message: api_response.error_message,
                })
            }
        }
    }

    async fn photo(
        &self,
        photo_reference: &str,
        caller: &CallerContext,
    ) -> Result<String, UpstreamError> {
        log::debug!("Ola Maps photo lookup: reference={}", photo_reference);

        let request = self
            .get("/places/v1/photo", caller)
            .query(&[("photo_reference", photo_reference)]);
        let api_response: PhotoResponse = self.send_json(request).await?;

        api_response
            .photo_urls
            .into_iter()
            .find(|url| !url.is_empty())
            .ok_or(UpstreamError::MissingPhotoUrl)
    }

    fn static_map_url(&self, lat: f64, lng: f64) -> String {
        format!(
            "{}/maps/v1/static?center={},{}&zoom={}&size={}&api_key={}",
            self.base_url, lat, lng, STATIC_MAP_ZOOM, STATIC_MAP_SIZE, self.api_key
        )
    }
}
