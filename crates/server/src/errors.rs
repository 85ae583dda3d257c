use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use service::errors::ServiceError;

/// Maps service failures onto the HTTP surface: BadRequest and NotFound
/// become 400/404 with empty bodies, anything fatal a bare 500.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ServiceError::Db(detail) => {
                error!(error = %detail, "service failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
