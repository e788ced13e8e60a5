use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::{
    models::ErrorResponse, state::AppState, utils::json_response,
    validation::ContactValidationError,
};
use crate::config::StatusPolicy;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid payload")]
    InvalidPayload,
    #[error("invalid id")]
    InvalidId,
    #[error("data not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("invalid contact: {0}")]
    InvalidContact(#[from] ContactValidationError),
    #[error("payload too large: {0} bytes")]
    PayloadTooLarge(usize),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this error under the given policy
    pub fn status_code(&self, policy: StatusPolicy) -> StatusCode {
        match (self, policy) {
            (ApiError::InvalidPayload | ApiError::InvalidId, StatusPolicy::Strict) => {
                StatusCode::BAD_REQUEST
            }
            (ApiError::MethodNotAllowed, StatusPolicy::Strict) => StatusCode::METHOD_NOT_ALLOWED,
            (ApiError::InvalidContact(_), StatusPolicy::Strict) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            (
                ApiError::InvalidPayload
                | ApiError::InvalidId
                | ApiError::MethodNotAllowed
                | ApiError::InvalidContact(_),
                StatusPolicy::Compatible,
            ) => StatusCode::OK,
            (ApiError::NotFound, _) => StatusCode::NOT_FOUND,
            (ApiError::PayloadTooLarge(_), _) => StatusCode::PAYLOAD_TOO_LARGE,
            (ApiError::Internal(_), _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Status an error response takes when the strict policy is active.
/// Attached as a response extension and consumed by [`apply_error_policy`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct StrictStatus(pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(message) = &self {
            tracing::error!(error = %message, "Failed to produce response");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("error: {message}"))
                .into_response();
        }

        let strict = self.status_code(StatusPolicy::Strict);
        let body = ErrorResponse {
            error: self.to_string(),
        };

        let mut response =
            match json_response(self.status_code(StatusPolicy::Compatible), &body) {
                Ok(response) => response,
                Err(err) => return err.into_response(),
            };
        response.extensions_mut().insert(StrictStatus(strict));
        response
    }
}

/// Response middleware: counts client errors and, under the strict policy,
/// replaces the compatible status with the 4xx one.
pub async fn apply_error_policy(State(state): State<AppState>, mut response: Response) -> Response {
    if let Some(StrictStatus(status)) = response.extensions().get::<StrictStatus>().copied() {
        state.metrics.request_rejected();
        if state.config.api.status_policy == StatusPolicy::Strict {
            *response.status_mut() = status;
        }
    }
    response
}
