//! Error body shared by the JSON endpoints.

use serde::Serialize;

use crate::services::{ErrorKind, ServiceError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Builds the body for `err`, attaching the underlying cause only when
    /// `expose_details` is set.
    pub fn from_service_error(err: &ServiceError, expose_details: bool) -> Self {
        Self {
            kind: err.kind(),
            message: err.public_message().to_string(),
            details: err
                .details()
                .filter(|_| expose_details)
                .map(str::to_string),
        }
    }
}
