use mailgun::MailgunEmailService;
use relay_email_contracts::{Email, EmailReceipt, EmailService};
use smtp::SmtpEmailService;

pub mod mailgun;
pub mod smtp;

/// The mail channel selected by the configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Smtp(SmtpEmailService),
    Mailgun(MailgunEmailService),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<EmailReceipt> {
        match self {
            Self::Smtp(smtp) => smtp.send(email).await,
            Self::Mailgun(mailgun) => mailgun.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Smtp(smtp) => smtp.ping().await,
            Self::Mailgun(mailgun) => mailgun.ping().await,
        }
    }
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}

impl From<MailgunEmailService> for EmailServiceImpl {
    fn from(value: MailgunEmailService) -> Self {
        Self::Mailgun(value)
    }
}
