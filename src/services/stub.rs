// src/services/stub.rs
// DOCUMENTATION: Recording PlacesApi stub for tests
// PURPOSE: Serve canned upstream responses and record every outbound call

use crate::errors::UpstreamError;
use crate::models::PlaceResult;
use crate::services::{CallerContext, NearbySearchParams, PlacesApi};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Outbound call captured by the stub
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Autocomplete { input: String, caller: CallerContext },
    NearbySearch(NearbySearchParams),
    Photo(String),
}

/// Canned upstream keyed by request parameters
/// DOCUMENTATION: Unknown `types` filters return no places, unknown photo
/// references fail the lookup
#[derive(Default)]
pub struct StubPlacesApi {
    places_by_types: HashMap<String, Vec<PlaceResult>>,
    failing_types: HashSet<String>,
    photo_urls: HashMap<String, String>,
    autocomplete: Option<Result<Value, Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubPlacesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_places(mut self, types: &str, places: Vec<Value>) -> Self {
        let places = places
            .into_iter()
            .map(|value| serde_json::from_value(value).expect("stub place must deserialize"))
            .collect();
        self.places_by_types.insert(types.to_string(), places);
        self
    }

    pub fn with_failing_search(mut self, types: &str) -> Self {
        self.failing_types.insert(types.to_string());
        self
    }

    pub fn with_photo(mut self, reference: &str, url: &str) -> Self {
        self.photo_urls.insert(reference.to_string(), url.to_string());
        self
    }

    pub fn with_autocomplete(mut self, body: Value) -> Self {
        self.autocomplete = Some(Ok(body));
        self
    }

    /// Autocomplete answers with HTTP 403 and this body
    pub fn with_autocomplete_error(mut self, body: Value) -> Self {
        self.autocomplete = Some(Err(body));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<NearbySearchParams> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::NearbySearch(params) => Some(params),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlacesApi for StubPlacesApi {
    async fn autocomplete(
        &self,
        input: &str,
        caller: &CallerContext,
    ) -> Result<Value, UpstreamError> {
        self.record(RecordedCall::Autocomplete {
            input: input.to_string(),
            caller: caller.clone(),
        });
        match &self.autocomplete {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(body)) => Err(UpstreamError::Status {
                status: 403,
                body: body.clone(),
            }),
            None => Ok(json!({ "predictions": [], "status": "ok" })),
        }
    }

    async fn nearby_search(
        &self,
        params: &NearbySearchParams,
        _caller: &CallerContext,
    ) -> Result<Vec<PlaceResult>, UpstreamError> {
        self.record(RecordedCall::NearbySearch(params.clone()));
        if self.failing_types.contains(&params.types) {
            return Err(UpstreamError::Status {
                status: 502,
                body: json!({ "message": "upstream unavailable" }),
            });
        }
        Ok(self
            .places_by_types
            .get(&params.types)
            .cloned()
            .unwrap_or_default())
    }

    async fn photo(
        &self,
        photo_reference: &str,
        _caller: &CallerContext,
    ) -> Result<String, UpstreamError> {
        self.record(RecordedCall::Photo(photo_reference.to_string()));
        self.photo_urls
            .get(photo_reference)
            .cloned()
            .ok_or(UpstreamError::MissingPhotoUrl)
    }

    fn static_map_url(&self, lat: f64, lng: f64) -> String {
        format!("https://maps.test/static?center={},{}", lat, lng)
    }
}
