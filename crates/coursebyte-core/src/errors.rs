//! Application error type and its HTTP envelope.
//!
//! Every failure inside a request is converted into an [`AppError`] at the
//! point where it happens. The response body always has the shape
//!
//! ```json
//! { "error": true, "msg": "<description>" }
//! ```
//!
//! plus any extra fields attached with [`AppError::with_field`] (list and get
//! failures add `count`/`courses` or `course` so the body keeps the same keys
//! as the success envelope).

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub fields: Map<String, Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            fields: Map::new(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(msg.into()))
    }

    /// Field constraint violations, joined into one message.
    pub fn validation(violations: &[String]) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            anyhow::anyhow!("{}", violations.join(", ")),
        )
    }

    /// Attach an extra top-level field to the error envelope.
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = %self.error, "request failed");
        }

        let mut body = Map::new();
        body.insert("error".to_string(), Value::Bool(true));
        body.insert("msg".to_string(), Value::String(self.error.to_string()));
        body.extend(self.fields);

        (self.status, Json(Value::Object(body))).into_response()
    }
}
