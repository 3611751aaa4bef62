use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidQuantity
            | CartError::NameEmpty
            | CartError::NegativePrice
            | CartError::InvalidPrice => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound | CartError::CartNotFound | CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::OutOfStock => (StatusCode::CONFLICT, "OutOfStock"),
            CartError::Repository(RepositoryError::Conflict) => (StatusCode::CONFLICT, "Conflict"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::new(name, self.user_message()))
    }
}
