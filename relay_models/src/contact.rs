use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// Placeholder rendered in place of a missing phone number.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").unwrap());

/// A contact form submission exactly as it was received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<ContactPhone>,
    pub content: ContactMessageContent,
}

impl ContactMessage {
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_deref().map_or(PHONE_NOT_PROVIDED, String::as_str)
    }
}

nutype_string!(ContactName(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 50)
));

nutype_string!(ContactPhone(sanitize(trim), validate(regex = PHONE_REGEX)));

nutype_string!(ContactMessageContent(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 1000)
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// The user facing explanation of the constraint on this field.
    pub fn violation_reason(self) -> &'static str {
        match self {
            Self::Name => "Name must be between 2 and 50 characters",
            Self::Email => "Please provide a valid email address",
            Self::Phone => "Please provide a valid phone number",
            Self::Message => "Message must be between 10 and 1000 characters",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFieldViolation {
    pub field: ContactField,
    pub reason: &'static str,
}

impl From<ContactField> for ContactFieldViolation {
    fn from(field: ContactField) -> Self {
        Self {
            field,
            reason: field.violation_reason(),
        }
    }
}
