use std::{collections::HashSet, sync::LazyLock};

use ammonia::Builder;
use regex::{Captures, Regex};
use relay_models::{
    contact::{
        ContactField, ContactFieldViolation, ContactMessage, ContactMessageContent, ContactName,
        ContactPhone,
    },
    email_address::EmailAddress,
};

use crate::validate::check;

/// Allows no tags at all. Text inside `script` and `style` is dropped with
/// the element, everything else keeps its text content.
static MARKUP_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .clean_content_tags(["script", "style"].into_iter().collect::<HashSet<_>>())
        .strip_comments(true);
    builder
});

/// The escapes emitted when serializing a text node.
static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|nbsp);").unwrap());

/// Sanitize every field of a validated message.
///
/// Fields that no longer satisfy their constraints once markup is removed are
/// reported as violations.
pub fn sanitize(message: ContactMessage) -> Result<ContactMessage, Vec<ContactFieldViolation>> {
    let mut violations = Vec::new();

    let name = check(
        ContactName::try_new(sanitize_text(&message.name)),
        ContactField::Name,
        &mut violations,
    );

    let email = check(
        sanitize_text(message.email.as_str()).parse::<EmailAddress>(),
        ContactField::Email,
        &mut violations,
    );

    let phone = match message.phone {
        Some(phone) => check(
            ContactPhone::try_new(sanitize_text(&phone)).map(Some),
            ContactField::Phone,
            &mut violations,
        ),
        None => Some(None),
    };

    let content = check(
        ContactMessageContent::try_new(sanitize_text(&message.content)),
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

/// Remove all markup from `text`.
///
/// The text is parsed as an HTML fragment, every element is unwrapped and the
/// remaining text is unescaped again. This is repeated until the text no
/// longer changes, so encoded tags like `&lt;b&gt;` are removed as well. A `<`
/// that does not open a tag, as in `1 < 2`, is kept. Control characters other
/// than tab, line feed and carriage return are dropped. The result is a fixed
/// point: sanitizing it again returns it unchanged.
pub fn sanitize_text(text: &str) -> String {
    let mut current = text.to_owned();
    loop {
        // each pass that changes the text unwraps markup or decodes one level
        // of entities
        let next = sanitize_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_once(text: &str) -> String {
    let cleaned = MARKUP_CLEANER.clean(text).to_string();
    unescape(&cleaned)
        .chars()
        .filter(|&c| is_allowed(c))
        .collect()
}

fn unescape(text: &str) -> String {
    ESCAPE_REGEX
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "\u{a0}",
        })
        .into_owned()
}

fn is_allowed(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        c => !c.is_control(),
    }
}
