use relay_core_contact_contracts::{
    compose::ContactComposeService, delivery::ContactDeliveryService, ContactFeatureService,
    ContactReceipt, ContactSendMessageError,
};
use relay_di::Build;
use relay_models::{contact::ContactSubmission, RequestId};
use tracing::{debug, info};

pub mod compose;
pub mod delivery;
pub mod sanitize;
pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build, Default)]
pub struct ContactFeatureServiceImpl<Compose, Delivery> {
    compose: Compose,
    delivery: Delivery,
}

impl<Compose, Delivery> ContactFeatureService for ContactFeatureServiceImpl<Compose, Delivery>
where
    Compose: ContactComposeService,
    Delivery: ContactDeliveryService,
{
    async fn send_message(
        &self,
        request_id: RequestId,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, ContactSendMessageError> {
        let message = validate::validate(submission)
            .and_then(sanitize::sanitize)
            .map_err(|violations| {
                debug!(%request_id, ?violations, "Rejected contact form submission");
                ContactSendMessageError::Validation(violations)
            })?;

        let email = self.compose.compose(request_id, &message)?;
        info!(%request_id, "Relaying contact message");

        let receipt = self.delivery.deliver(email).await?;

        Ok(ContactReceipt {
            request_id,
            email_id: receipt.id,
        })
    }
}
