//! Typed errors and HTTP mapping.
//!
//! Only success bodies carry the `{status, data}` envelope; error bodies are
//! the raw error representation. Validation failures keep the repository's
//! field-level detail so the client can point at the offending attribute.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { field, message } => {
                let mut body = serde_json::Map::new();
                body.insert(field.to_string(), json!([message]));
                (StatusCode::BAD_REQUEST, Json(Value::Object(body))).into_response()
            }
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": {
                        "code": "not_found",
                        "message": format!("{resource} {id} not found")
                    }
                })),
            )
                .into_response(),
            AppError::Db(e) => {
                // Log the actual error, return a generic message.
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": {
                            "code": "database_error",
                            "message": "an internal error occurred"
                        }
                    })),
                )
                    .into_response()
            }
        }
    }
}
