use std::sync::{Arc, LazyLock};

use relay_email_contracts::{Email, EmailBody, EmailReceipt, EmailService};
use relay_utils::relay_version;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.mailgun.net/";

static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("Contact Relay (Version {})", relay_version()));

/// Delivers emails through the Mailgun HTTP API.
#[derive(Debug, Clone)]
pub struct MailgunEmailService {
    client: reqwest::Client,
    config: Arc<MailgunConfig>,
}

#[derive(Debug)]
struct MailgunConfig {
    messages_endpoint: Url,
    domain_endpoint: Url,
    api_key: String,
}

impl MailgunEmailService {
    pub fn new(base_url: &Url, domain: &str, api_key: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()?;

        let config = MailgunConfig {
            messages_endpoint: base_url.join(&format!("v3/{domain}/messages"))?,
            domain_endpoint: base_url.join(&format!("v3/domains/{domain}"))?,
            api_key,
        };

        Ok(Self {
            client,
            config: config.into(),
        })
    }
}

impl EmailService for MailgunEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<EmailReceipt> {
        let response = self
            .client
            .post(self.config.messages_endpoint.clone())
            .basic_auth("api", Some(&self.config.api_key))
            .form(&form_fields(email))
            .send()
            .await?
            .error_for_status()?
            .json::<SendResponse>()
            .await?;

        tracing::debug!(id = %response.id, message = %response.message, "mailgun accepted message");

        Ok(EmailReceipt { id: response.id })
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.client
            .get(self.config.domain_endpoint.clone())
            .basic_auth("api", Some(&self.config.api_key))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

fn form_fields(email: Email) -> Vec<(&'static str, String)> {
    let mut fields = vec![("from", email.from.to_string())];
    fields.extend(email.recipients.iter().map(|r| ("to", r.to_string())));
    fields.extend(email.bcc.iter().map(|r| ("bcc", r.to_string())));
    fields.extend(email.reply_to.map(|r| ("h:Reply-To", r.to_string())));
    fields.push(("subject", email.subject));

    match email.body {
        EmailBody::Text(text) => fields.push(("text", text)),
        EmailBody::Html(html) => fields.push(("html", html)),
        EmailBody::Alternative { text, html } => {
            fields.push(("text", text));
            fields.push(("html", html));
        }
    }

    fields
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
    message: String,
}
