use std::future::Future;

use relay_models::email_address::EmailAddressWithName;

/// A channel through which emails can be delivered.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand the email over to the mail provider.
    ///
    /// Returns the acknowledgment of the provider if it accepted the email.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<EmailReceipt>> + Send;

    /// Check whether the mail provider is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: EmailAddressWithName,
    pub recipients: Vec<EmailAddressWithName>,
    pub bcc: Vec<EmailAddressWithName>,
    pub reply_to: Option<EmailAddressWithName>,
    pub subject: String,
    pub body: EmailBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    Html(String),
    /// Html body with a plain text fallback.
    Alternative { text: String, html: String },
}

/// Acknowledgment returned by the mail provider for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceipt {
    pub id: String,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: anyhow::Result<EmailReceipt>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_failures(mut self, email: Email, failures: usize) -> Self {
        self.expect_send()
            .times(failures)
            .with(mockall::predicate::eq(email))
            .returning(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "connection refused"
                ))))
            });
        self
    }
}
