use relay_models::{
    contact::{
        ContactField, ContactFieldViolation, ContactMessage, ContactMessageContent, ContactName,
        ContactPhone, ContactSubmission,
    },
    email_address::EmailAddress,
};

/// Check every field of the submission and collect all violations.
///
/// An empty or blank phone number counts as not provided.
pub fn validate(submission: ContactSubmission) -> Result<ContactMessage, Vec<ContactFieldViolation>> {
    let mut violations = Vec::new();

    let name = check(
        ContactName::try_new(submission.name),
        ContactField::Name,
        &mut violations,
    );

    let email = check(
        submission.email.trim().parse::<EmailAddress>(),
        ContactField::Email,
        &mut violations,
    );

    let phone = match submission.phone.filter(|phone| !phone.trim().is_empty()) {
        Some(phone) => check(
            ContactPhone::try_new(phone).map(Some),
            ContactField::Phone,
            &mut violations,
        ),
        None => Some(None),
    };

    let content = check(
        ContactMessageContent::try_new(submission.message),
        ContactField::Message,
        &mut violations,
    );

    match (name, email, phone, content) {
        (Some(name), Some(email), Some(phone), Some(content)) => Ok(ContactMessage {
            name,
            email,
            phone,
            content,
        }),
        _ => Err(violations),
    }
}

pub(crate) fn check<T, E>(
    result: Result<T, E>,
    field: ContactField,
    violations: &mut Vec<ContactFieldViolation>,
) -> Option<T> {
    result.map_err(|_| violations.push(field.into())).ok()
}
