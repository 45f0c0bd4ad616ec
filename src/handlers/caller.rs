// src/handlers/caller.rs
// DOCUMENTATION: Extract the caller identity replayed to the upstream API
// PURPOSE: Let handlers take CallerContext as a plain argument

use crate::services::CallerContext;
use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use std::convert::Infallible;
use std::future::{ready, Ready};

fn header_value(req: &HttpRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromRequest for CallerContext {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(CallerContext {
            origin: header_value(req, header::ORIGIN).or_else(|| header_value(req, header::REFERER)),
            user_agent: header_value(req, header::USER_AGENT),
        }))
    }
}
