use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_models::ErrorId;
use relay_shared_contracts::id::IdService;

use crate::models::{ApiFieldViolation, ApiResponse};

pub mod contact;
pub mod health;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "Sorry, we could not send your message. Please try again later.";

/// Builds the generic response for unexpected failures.
#[derive(Debug)]
pub struct ErrorResponder<Id> {
    pub id: Arc<Id>,
    pub production: bool,
}

impl<Id: IdService> ErrorResponder<Id> {
    /// Log the error with a fresh error id and return a 500 response which
    /// references it.
    pub fn internal_server_error(&self, err: impl Into<anyhow::Error>) -> Response {
        let err = err.into();
        let error_id = self.id.generate::<ErrorId>();
        tracing::error!(%error_id, "internal server error: {err:#}");

        let response = ApiResponse {
            error_id: Some(error_id),
            error: (!self.production).then(|| format!("{err:#}")),
            ..ApiResponse::failure(INTERNAL_SERVER_ERROR_MESSAGE)
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
    }
}

fn validation_failed(errors: Vec<ApiFieldViolation>) -> Response {
    let response = ApiResponse {
        errors,
        ..ApiResponse::failure("Validation failed")
    };

    (StatusCode::BAD_REQUEST, Json(response)).into_response()
}
