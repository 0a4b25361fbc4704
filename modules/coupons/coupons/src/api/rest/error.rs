//! REST error mapping for the coupons module.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Payloads that do not
//! bind are client errors; anything the service reports is a server error.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::ErrorResponse;
use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    MalformedRequest(#[from] JsonRejection),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::MalformedRequest(rejection) => {
                tracing::debug!(error = %rejection, "Rejected malformed payload");
            }
            Self::Domain(e) => tracing::error!(error = ?e, "Coupon request failed"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
