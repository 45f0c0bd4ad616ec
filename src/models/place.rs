// src/models/place.rs
// DOCUMENTATION: Place records returned by the upstream places API
// PURPOSE: Keep upstream payloads opaque while exposing the fields the proxy reads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Place record as returned by the upstream nearby search
/// DOCUMENTATION: Only `place_id` and `photos` are interpreted; every other
/// field is captured in `extra` and serialized back unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Upstream place identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,

    /// Photo references, either bare strings or `{ "photo_reference": ... }` objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Value>>,

    /// Everything else (name, structured_formatting, geometry, rating, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlaceResult {
    /// First usable photo reference, if the place carries one
    pub fn first_photo_reference(&self) -> Option<&str> {
        let first = self.photos.as_ref()?.first()?;
        let reference = match first {
            Value::String(reference) => reference.as_str(),
            Value::Object(photo) => photo.get("photo_reference")?.as_str()?,
            _ => return None,
        };
        if reference.is_empty() {
            None
        } else {
            Some(reference)
        }
    }
}

/// Place record decorated with a resolved photo URL
/// DOCUMENTATION: `photo_url` is omitted from the JSON entirely when unresolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlaceResult {
    #[serde(flatten)]
    pub place: PlaceResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl EnrichedPlaceResult {
    pub fn without_photo(place: PlaceResult) -> Self {
        Self {
            place,
            photo_url: None,
        }
    }

    pub fn with_photo(place: PlaceResult, photo_url: String) -> Self {
        Self {
            place,
            photo_url: Some(photo_url),
        }
    }
}
