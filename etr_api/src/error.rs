use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use etr_pricing::error::PricingError;

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<PricingError> for ApiError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::UnknownLocation(_) => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

impl aide::OperationOutput for ApiError {
    type Inner = ();
}
