//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::Error;

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
];

fn response(status: u16, body: Body) -> Result<Response<Body>, lambda_http::Error> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder.body(body)?)
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    response(status, Body::from(serde_json::to_string(data)?))
}

/// Create a response with an empty body, used for CORS preflight.
pub fn empty_response(status: u16) -> Result<Response<Body>, lambda_http::Error> {
    response(status, Body::Empty)
}

/// Create an error response from a proxy error.
pub fn error_response(error: &Error) -> Result<Response<Body>, lambda_http::Error> {
    json_response(error.status_code(), &error.body())
}
