use std::sync::LazyLock;

use relay_core_contact_contracts::{compose::ContactEmail, ContactReceipt};
use relay_email_contracts::{Email, EmailBody, EmailReceipt};
use relay_models::{
    contact::{ContactMessage, ContactSubmission},
    email_address::EmailAddressWithName,
    RequestId,
};
use relay_templates_contracts::BrandingTemplate;

use crate::{HTML_BODY, UUID1};

pub const TEXT_BODY: &str =
    "Name: Jo\nEmail: jo@example.com\nPhone: 555-123-4567\nMessage: Hello, this is a test message.";

pub fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        phone: Some("555-123-4567".into()),
        message: "Hello, this is a test message.".into(),
    }
}

pub static MESSAGE_JO: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Jo".try_into().unwrap(),
    email: "jo@example.com".parse().unwrap(),
    phone: Some("555-123-4567".try_into().unwrap()),
    content: "Hello, this is a test message.".try_into().unwrap(),
});

pub static REQUEST_ID_1: LazyLock<RequestId> = LazyLock::new(|| UUID1.into());

pub static SENDER: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Contact Form <noreply@example.com>".parse().unwrap());

pub static RECIPIENTS: LazyLock<Vec<EmailAddressWithName>> =
    LazyLock::new(|| vec!["office@example.com".parse().unwrap()]);

pub static BCC: LazyLock<Vec<EmailAddressWithName>> =
    LazyLock::new(|| vec!["archive@example.com".parse().unwrap()]);

pub static BRANDING: LazyLock<BrandingTemplate> = LazyLock::new(|| BrandingTemplate {
    company_name: "Example Inc.".into(),
    logo_url: Some("https://example.com/logo.png".into()),
    address: Some("1 Example Street, Springfield".into()),
    phone: Some("+1 555 000 0000".into()),
});

/// The email composed for [`MESSAGE_JO`] with [`REQUEST_ID_1`].
pub fn contact_email() -> ContactEmail {
    ContactEmail {
        request_id: *REQUEST_ID_1,
        email: Email {
            from: SENDER.clone(),
            recipients: RECIPIENTS.clone(),
            bcc: BCC.clone(),
            reply_to: Some("jo@example.com".parse().unwrap()),
            subject: "New Contact Form Submission from Jo".into(),
            body: EmailBody::Alternative {
                text: TEXT_BODY.into(),
                html: HTML_BODY.into(),
            },
        },
    }
}

pub fn email_receipt() -> EmailReceipt {
    EmailReceipt {
        id: "<20241019123456.1@mg.example.com>".into(),
    }
}

pub fn contact_receipt() -> ContactReceipt {
    ContactReceipt {
        request_id: *REQUEST_ID_1,
        email_id: email_receipt().id,
    }
}
