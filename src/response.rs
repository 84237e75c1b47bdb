//! Success envelope helpers.
//!
//! Every 2xx body is `{"status": "success", "data": ...}`. DELETE responds
//! 200 with the removed row in the envelope rather than an empty 204.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub data: T,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status: "success",
            data,
        }),
    )
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::CREATED,
        Json(Envelope {
            status: "success",
            data,
        }),
    )
}
