// src/services/search_service.rs
// DOCUMENTATION: Free-text search forwarding
// PURPOSE: Forward queries to autocomplete and decorate predictions with map images

use crate::errors::UpstreamError;
use crate::services::{CallerContext, PlacesApi};
use serde_json::{Map, Value};

pub struct SearchService;

impl SearchService {
    /// Forward a query and attach `map_url` to each prediction
    /// DOCUMENTATION: The upstream body is passed through with `predictions`
    /// replaced by the decorated list. A missing prediction list becomes empty.
    pub async fn search<A>(
        api: &A,
        input: &str,
        caller: &CallerContext,
    ) -> Result<Value, UpstreamError>
    where
        A: PlacesApi + ?Sized,
    {
        let body = api.autocomplete(input, caller).await?;

        let mut body = match body {
            Value::Object(map) => map,
            other => {
                return Err(UpstreamError::Parse(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        let predictions = match body.remove("predictions") {
            Some(Value::Array(predictions)) => predictions,
            _ => Vec::new(),
        };

        let predictions: Vec<Value> = predictions
            .into_iter()
            .map(|prediction| Self::with_map_url(api, prediction))
            .collect();

        log::info!(
            "Autocomplete for {:?} returned {} predictions",
            input,
            predictions.len()
        );

        body.insert("predictions".to_string(), Value::Array(predictions));
        Ok(Value::Object(body))
    }

    /// Predictions without coordinates pass through undecorated
    fn with_map_url<A>(api: &A, mut prediction: Value) -> Value
    where
        A: PlacesApi + ?Sized,
    {
        let coordinates = Self::coordinates(&prediction);
        if let (Some((lat, lng)), Value::Object(fields)) = (coordinates, &mut prediction) {
            fields.insert("map_url".to_string(), Value::String(api.static_map_url(lat, lng)));
        }
        prediction
    }

    fn coordinates(prediction: &Value) -> Option<(f64, f64)> {
        let location: &Map<String, Value> = prediction
            .get("geometry")?
            .get("location")?
            .as_object()?;
        Some((location.get("lat")?.as_f64()?, location.get("lng")?.as_f64()?))
    }
}
