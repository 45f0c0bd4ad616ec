// src/middleware/cors.rs
// DOCUMENTATION: Permissive CORS for the browser client
// PURPOSE: Origin policy via actix-cors plus the fixed header set every response carries

use actix_cors::Cors;
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{
        header::{self, HeaderMap, HeaderValue},
        Method,
    },
    middleware::Next,
    Error, HttpResponse,
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Any origin, the methods and headers the browser client uses
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allowed_header("X-Requested-With")
}

/// Fixed CORS headers and unconditional preflight
/// DOCUMENTATION: Must wrap outside `cors_policy`. Any OPTIONS request gets
/// 200 before routing, even without Access-Control-Request-Method, and every
/// response carries the same three header strings, with or without an Origin.
pub async fn fixed_cors_headers<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if req.method() == Method::OPTIONS {
        log::debug!("Preflight {}", req.path());
        let mut res = req.into_response(HttpResponse::Ok().finish());
        apply_headers(res.headers_mut());
        return Ok(res.map_into_right_body());
    }

    let mut res = next.call(req).await?;
    apply_headers(res.headers_mut());
    Ok(res.map_into_left_body())
}

fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}
