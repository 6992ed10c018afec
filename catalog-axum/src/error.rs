//! Error-to-response mapping for the product endpoints.

use crate::validation::FieldError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Serialize;

/// Error type shared by every product endpoint.
///
/// Validation failures carry the full accumulated list; everything the
/// store reports collapses to `Internal`, logged at the call site and
/// answered with a 500 so no request is ever left hanging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more fields failed validation
    #[error("la petición contiene campos no válidos")]
    Validation(Vec<FieldError>),
    /// The addressed product does not exist
    #[error("Producto no encontrado")]
    NotFound,
    /// The store failed, or no store connection is available
    #[error("Hubo un error")]
    Internal,
}

/// Body shape for 404 and 500 responses
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct ErrorBody {
    error: String,
}

/// Body shape for 400 responses: every accumulated failure
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct ErrorList {
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorList { errors })).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl aide::OperationOutput for ApiError {
    type Inner = Self;
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Validation(vec![err])
    }
}
