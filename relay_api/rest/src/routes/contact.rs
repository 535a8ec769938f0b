use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use relay_core_contact_contracts::{ContactFeatureService, ContactReceipt, ContactSendMessageError};
use relay_models::RequestId;
use relay_shared_contracts::id::IdService;

use super::{validation_failed, ErrorResponder};
use crate::models::{contact::ApiContactSubmission, ApiFieldViolation, ApiResponse};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message. We'll get back to you soon!";

pub fn router<Id: IdService>(
    service: Arc<impl ContactFeatureService>,
    errors: Arc<ErrorResponder<Id>>,
) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .with_state((service, errors))
}

async fn send_message<Id: IdService>(
    State((service, errors)): State<(Arc<impl ContactFeatureService>, Arc<ErrorResponder<Id>>)>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let submission = match body {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            return validation_failed(vec![ApiFieldViolation {
                field: "body",
                reason: rejection.body_text(),
            }])
        }
    };

    match service.send_message(request_id, submission.into()).await {
        Ok(ContactReceipt { request_id, .. }) => Json(ApiResponse {
            request_id: Some(request_id),
            ..ApiResponse::success(SUCCESS_MESSAGE)
        })
        .into_response(),
        Err(ContactSendMessageError::Validation(violations)) => {
            validation_failed(violations.into_iter().map(Into::into).collect())
        }
        Err(ContactSendMessageError::Delivery(err)) => errors.internal_server_error(err),
        Err(ContactSendMessageError::Other(err)) => errors.internal_server_error(err),
    }
}
