// src/handlers/nearby.rs
// DOCUMENTATION: HTTP handler for nearby-places aggregation
// PURPOSE: Validate input, run the category fan-out, wrap the grouped result

use crate::config::Config;
use crate::errors::ProxyError;
use crate::models::{validation_message, ApiResponse, NearbyRequest, TypeFilter};
use crate::services::{CallerContext, NearbyQuery, NearbyService, PlacesApi};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// POST /api/nearby
/// Nearby places grouped by category
pub async fn nearby(
    api: web::Data<Arc<dyn PlacesApi>>,
    config: web::Data<Config>,
    caller: CallerContext,
    req: web::Json<NearbyRequest>,
) -> Result<impl Responder, ProxyError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(ProxyError::ValidationError(validation_message(&e)));
    }
    let location = req
        .location()
        .ok_or_else(|| ProxyError::InvalidInput("Location is required".to_string()))?;

    if config.ola_maps_api_key.is_empty() {
        return Err(ProxyError::Configuration {
            context: "Failed to fetch nearby places".to_string(),
            details: "OLA_MAPS_API_KEY is not configured".to_string(),
        });
    }

    let query = NearbyQuery {
        location: location.to_string(),
        radius: req.radius(),
        filter: TypeFilter::from_request(req.types.as_deref()),
    };

    let grouped = NearbyService::aggregate(api.get_ref().as_ref(), &query, &caller).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(grouped)))
}

/// Configuration for nearby routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::resource("/nearby")
                .route(web::post().to(nearby))
                .default_service(web::to(super::not_found)),
        ),
    );
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::handlers::{test_app, test_app_with_config};
    use crate::models::Category;
    use crate::services::stub::StubPlacesApi;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Number, Value};
    use std::sync::Arc;

    fn mumbai_stub() -> StubPlacesApi {
        StubPlacesApi::new()
            .with_places(
                Category::Amenities.default_types(),
                vec![
                    json!({ "place_id": "ola-1", "name": "Kyani & Co", "photos": ["ref-1"] }),
                    json!({ "place_id": "ola-2", "name": "Yazdani Bakery" }),
                ],
            )
            .with_photo("ref-1", "https://photos.test/ref-1.jpg")
    }

    #[actix_web::test]
    async fn test_missing_location_is_rejected_without_calls() {
        let api = Arc::new(mumbai_stub());
        let app = test::init_service(test_app(api.clone())).await;

        let req = test::TestRequest::post()
            .uri("/api/nearby")
            .set_json(json!({ "radius": 500 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Location is required");
        assert!(api.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_grouped_response() {
        let api = Arc::new(mumbai_stub());
        let app = test::init_service(test_app(api)).await;

        let req = test::TestRequest::post()
            .uri("/api/nearby")
            .set_json(json!({ "location": "18.97,72.83" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            "Origin, X-Requested-With, Content-Type, Accept"
        );
        assert_eq!(
            headers.get("access-control-allow-methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "data": {
                    "amenities": [
                        {
                            "place_id": "ola-1",
                            "name": "Kyani & Co",
                            "photos": ["ref-1"],
                            "photo_url": "https://photos.test/ref-1.jpg"
                        },
                        { "place_id": "ola-2", "name": "Yazdani Bakery" }
                    ]
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_types_override_applies_to_every_search() {
        let api = Arc::new(StubPlacesApi::new());
        let app = test::init_service(test_app(api.clone())).await;

        let req = test::TestRequest::post()
            .uri("/api/nearby")
            .set_json(json!({ "location": "18.97,72.83", "radius": 2500, "types": "hospital" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!({}));

        let searches = api.searches();
        assert_eq!(searches.len(), 4);
        assert!(searches
            .iter()
            .all(|params| params.types == "hospital" && params.radius == Number::from(2500)));
    }

    #[actix_web::test]
    async fn test_identical_requests_identical_bytes() {
        let api = Arc::new(mumbai_stub());
        let app = test::init_service(test_app(api)).await;

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/nearby")
                .set_json(json!({ "location": "18.97,72.83" }))
                .to_request();
            bodies.push(test::call_and_read_body(&app, req).await);
        }
        assert_eq!(bodies[0], bodies[1]);
    }

    #[actix_web::test]
    async fn test_large_and_fractional_radius_forwarded_as_sent() {
        for (radius, expected) in [(json!(60000), "60000"), (json!(1500.5), "1500.5")] {
            let api = Arc::new(StubPlacesApi::new());
            let app = test::init_service(test_app(api.clone())).await;

            let req = test::TestRequest::post()
                .uri("/api/nearby")
                .set_json(json!({ "location": "18.97,72.83", "radius": radius }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            let searches = api.searches();
            assert_eq!(searches.len(), 4);
            assert!(searches
                .iter()
                .all(|params| params.radius.to_string() == expected));
        }
    }

    #[actix_web::test]
    async fn test_missing_api_key_fails_without_calls() {
        let api = Arc::new(mumbai_stub());
        let config = Config {
            ola_maps_api_key: String::new(),
            ..Config::for_tests()
        };
        let app = test::init_service(test_app_with_config(api.clone(), config)).await;

        let req = test::TestRequest::post()
            .uri("/api/nearby")
            .set_json(json!({ "location": "18.97,72.83" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "error": "Failed to fetch nearby places",
                "details": "OLA_MAPS_API_KEY is not configured"
            })
        );
        assert!(api.calls().is_empty());
    }
}
