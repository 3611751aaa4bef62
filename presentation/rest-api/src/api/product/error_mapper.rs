use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty
            | ProductError::SlugEmpty
            | ProductError::NegativePrice
            | ProductError::RatingOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Invalid product data",
            ),
            ProductError::InvalidPriceRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Price must be a range like 1-50",
            ),
            ProductError::InvalidRating => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Rating must be a number from 0 to 5",
            ),
            ProductError::InvalidSort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Sort must be one of newest, lowest, highest or rating",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Product not found"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Could not load products",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}
