use anyhow::{ensure, Context};
use relay_config::{EmailConfig, EmailTransport};
use relay_email_impl::{mailgun::MailgunEmailService, smtp::SmtpEmailService, EmailServiceImpl};

/// Set up the mail channel selected by the configuration.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    match config.transport {
        EmailTransport::Smtp => SmtpEmailService::new(&config.smtp_url)
            .map(Into::into)
            .context("Failed to set up SMTP transport"),
        EmailTransport::Mailgun => {
            let mailgun = &config.mailgun;
            ensure!(!mailgun.domain.is_empty(), "email.mailgun.domain is not set");
            ensure!(!mailgun.api_key.is_empty(), "email.mailgun.api_key is not set");
            MailgunEmailService::new(&mailgun.base_url, &mailgun.domain, mailgun.api_key.clone())
                .map(Into::into)
                .context("Failed to set up Mailgun client")
        }
    }
}
