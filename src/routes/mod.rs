use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::dto::api::ErrorResponse;
use crate::services::{ErrorKind, ServiceError};

pub mod api;

/// HTTP status used for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingQuery => StatusCode::BAD_REQUEST,
        ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a service error as a JSON error response.
pub fn error_response(err: &ServiceError, expose_details: bool) -> HttpResponse {
    HttpResponse::build(status_for(err.kind()))
        .json(ErrorResponse::from_service_error(err, expose_details))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(status_for(ErrorKind::MissingQuery), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::StoreUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(ErrorKind::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
