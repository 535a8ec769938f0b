use relay_models::{contact::ContactFieldViolation, ErrorId, RequestId};
use serde::Serialize;

pub mod contact;

/// The envelope of every response of the contact endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiFieldViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<ErrorId>,
    /// Error details, only exposed in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            success: true,
            ..Self::failure(message)
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            request_id: None,
            errors: Vec::new(),
            error_id: None,
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiFieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl From<ContactFieldViolation> for ApiFieldViolation {
    fn from(value: ContactFieldViolation) -> Self {
        Self {
            field: value.field.as_str(),
            reason: value.reason.into(),
        }
    }
}
