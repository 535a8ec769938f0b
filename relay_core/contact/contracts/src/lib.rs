use std::future::Future;

use delivery::ContactDeliveryError;
use relay_models::{
    contact::{ContactFieldViolation, ContactSubmission},
    RequestId,
};
use thiserror::Error;

pub mod compose;
pub mod delivery;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and relay it to the configured
    /// recipients.
    ///
    /// `request_id` identifies the HTTP request which carried the submission
    /// and is echoed in the returned receipt.
    fn send_message(
        &self,
        request_id: RequestId,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSendMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub request_id: RequestId,
    /// Acknowledgment of the mail provider.
    pub email_id: String,
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("The submission is invalid.")]
    Validation(Vec<ContactFieldViolation>),
    #[error(transparent)]
    Delivery(#[from] ContactDeliveryError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(
        mut self,
        request_id: RequestId,
        submission: ContactSubmission,
        result: Result<ContactReceipt, ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(
                mockall::predicate::eq(request_id),
                mockall::predicate::eq(submission),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
