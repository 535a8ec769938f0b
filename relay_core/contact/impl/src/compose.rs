use std::sync::Arc;

use relay_core_contact_contracts::compose::{ContactComposeService, ContactEmail};
use relay_di::Build;
use relay_email_contracts::{Email, EmailBody};
use relay_models::{contact::ContactMessage, email_address::EmailAddressWithName, RequestId};
use relay_templates_contracts::{BrandingTemplate, ContactMessageTemplate, TemplateService};
use relay_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ContactComposeServiceImpl<Template> {
    template: Template,
    config: ContactComposeConfig,
}

#[derive(Debug, Clone)]
pub struct ContactComposeConfig {
    /// Display name and address the email is sent from.
    pub sender: Arc<EmailAddressWithName>,
    pub recipients: Arc<[EmailAddressWithName]>,
    pub bcc: Arc<[EmailAddressWithName]>,
    pub branding: Arc<BrandingTemplate>,
}

impl<Template> ContactComposeService for ContactComposeServiceImpl<Template>
where
    Template: TemplateService,
{
    #[trace_instrument(skip(self))]
    fn compose(
        &self,
        request_id: RequestId,
        message: &ContactMessage,
    ) -> anyhow::Result<ContactEmail> {
        let name = message.name.as_str();
        let email = message.email.as_str();
        let phone = message.phone_or_placeholder();
        let content = message.content.as_str();

        let html = self.template.render(&ContactMessageTemplate {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: content.into(),
            branding: (*self.config.branding).clone(),
        })?;

        let text = format!("Name: {name}\nEmail: {email}\nPhone: {phone}\nMessage: {content}");

        Ok(ContactEmail {
            request_id,
            email: Email {
                from: (*self.config.sender).clone(),
                recipients: self.config.recipients.to_vec(),
                bcc: self.config.bcc.to_vec(),
                reply_to: Some(message.email.clone().into()),
                subject: format!("New Contact Form Submission from {name}"),
                body: EmailBody::Alternative { text, html },
            },
        })
    }
}
