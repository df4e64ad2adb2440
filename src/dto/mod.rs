//! JSON envelopes returned by the API.

use serde::Serialize;

/// Body of a successful create or update.
#[derive(Debug, Serialize)]
pub struct WriteResponse<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> WriteResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
