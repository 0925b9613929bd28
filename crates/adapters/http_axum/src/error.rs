//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use depot_domain::error::DepotError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body listing request-validation failures.
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

/// Maps failures to HTTP responses with appropriate status codes.
pub enum ApiError {
    /// A domain error surfaced by the lifecycle service.
    Domain(DepotError),
    /// The id path parameter is not a valid UUID.
    InvalidId,
    /// The request body failed schema validation.
    InvalidRequest(Vec<String>),
}

impl From<DepotError> for ApiError {
    fn from(err: DepotError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(err) => {
                let (status, message) = match &err {
                    DepotError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
                    DepotError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
                    DepotError::DeviceInUse(err) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
                    }
                    DepotError::Storage(err) => {
                        tracing::error!(error = %err, "storage error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "internal server error".to_string(),
                        )
                    }
                };
                (status, Json(ErrorBody { error: message })).into_response()
            }
            Self::InvalidId => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "invalid id param in url".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidRequest(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
        }
    }
}
