use std::{future::Future, time::Duration};

use relay_email_contracts::EmailReceipt;
use thiserror::Error;

use crate::compose::ContactEmail;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactDeliveryService: Send + Sync + 'static {
    /// Send the email through the mail channel, retrying transient failures.
    fn deliver(
        &self,
        email: ContactEmail,
    ) -> impl Future<Output = Result<EmailReceipt, ContactDeliveryError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactDeliveryError {
    #[error("Failed to deliver message after {attempts} attempts: {source:#}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to deliver message within {0:?}")]
    Timeout(Duration),
}

#[cfg(feature = "mock")]
impl MockContactDeliveryService {
    pub fn with_deliver(
        mut self,
        email: ContactEmail,
        result: Result<EmailReceipt, ContactDeliveryError>,
    ) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
