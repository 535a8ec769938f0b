use std::time::Duration;

use relay_core_contact_contracts::{
    compose::ContactEmail,
    delivery::{ContactDeliveryError, ContactDeliveryService},
};
use relay_di::Build;
use relay_email_contracts::{EmailReceipt, EmailService};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Build)]
pub struct ContactDeliveryServiceImpl<Email> {
    email: Email,
    config: ContactDeliveryConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDeliveryConfig {
    /// Total number of send attempts, including the first one.
    pub max_attempts: u32,
    /// The n-th retry waits `base_delay * n`.
    pub base_delay: Duration,
    /// Upper bound for the whole delivery, including all retries and delays.
    pub timeout: Duration,
}

impl Default for ContactDeliveryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

impl<Email> ContactDeliveryService for ContactDeliveryServiceImpl<Email>
where
    Email: EmailService,
{
    async fn deliver(&self, email: ContactEmail) -> Result<EmailReceipt, ContactDeliveryError> {
        let timeout = self.config.timeout;
        tokio::time::timeout(timeout, self.deliver_with_retry(email))
            .await
            .unwrap_or_else(|_| {
                error!(?timeout, "Contact message delivery timed out");
                Err(ContactDeliveryError::Timeout(timeout))
            })
    }
}

impl<Email> ContactDeliveryServiceImpl<Email>
where
    Email: EmailService,
{
    async fn deliver_with_retry(
        &self,
        ContactEmail { request_id, email }: ContactEmail,
    ) -> Result<EmailReceipt, ContactDeliveryError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.email.send(email.clone()).await {
                Ok(receipt) => {
                    info!(%request_id, attempt, email_id = %receipt.id, "Contact message delivered");
                    return Ok(receipt);
                }
                Err(err) if attempt < max_attempts => {
                    warn!(%request_id, attempt, max_attempts, "Failed to deliver contact message: {err:#}");
                    tokio::time::sleep(self.config.base_delay * attempt).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(%request_id, attempt, "Giving up on contact message: {err:#}");
                    return Err(ContactDeliveryError::Exhausted {
                        attempts: attempt,
                        source: err,
                    });
                }
            }
        }
    }
}
