use relay_email_contracts::Email;
use relay_models::{contact::ContactMessage, RequestId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactComposeService: Send + Sync + 'static {
    /// Build the email which relays the given message on behalf of the
    /// request `request_id`.
    fn compose(
        &self,
        request_id: RequestId,
        message: &ContactMessage,
    ) -> anyhow::Result<ContactEmail>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub request_id: RequestId,
    pub email: Email,
}

#[cfg(feature = "mock")]
impl MockContactComposeService {
    pub fn with_compose(
        mut self,
        request_id: RequestId,
        message: ContactMessage,
        result: ContactEmail,
    ) -> Self {
        self.expect_compose()
            .once()
            .with(
                mockall::predicate::eq(request_id),
                mockall::predicate::eq(message),
            )
            .return_once(|_, _| Ok(result));
        self
    }
}
