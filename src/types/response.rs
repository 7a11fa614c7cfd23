//! Response envelope types.
//!
//! Every body this API produces, success or error, is wrapped in
//! `{ "data": <payload> }`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::new(self.0))).into_response()
    }
}
