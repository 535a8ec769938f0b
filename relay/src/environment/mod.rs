use std::sync::Arc;

use anyhow::ensure;
use relay_api_rest::RestServerConfig;
use relay_config::Config;
use relay_core_contact_impl::{compose::ContactComposeConfig, delivery::ContactDeliveryConfig};
use relay_di::provider;
use relay_models::email_address::EmailAddressWithName;
use relay_templates_contracts::BrandingTemplate;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContactComposeConfig,
            ContactDeliveryConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_compose_config: ContactComposeConfig,
        contact_delivery_config: ContactDeliveryConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        ensure!(
            !config.contact.recipients.is_empty(),
            "contact.recipients must contain at least one address"
        );
        ensure!(
            config.contact.max_attempts >= 1,
            "contact.max_attempts must be at least 1"
        );

        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            allowed_origins: config.http.allowed_origins.as_slice().into(),
            production: config.http.production,
        };

        // Core
        let contact_compose_config = ContactComposeConfig {
            sender: sender(config).into(),
            recipients: config.contact.recipients.iter().cloned().map(Into::into).collect(),
            bcc: config.contact.bcc.iter().cloned().map(Into::into).collect(),
            branding: Arc::new(BrandingTemplate {
                company_name: config.branding.company_name.clone(),
                logo_url: config.branding.logo_url.clone(),
                address: config.branding.address.clone(),
                phone: config.branding.phone.clone(),
            }),
        };

        let contact_delivery_config = ContactDeliveryConfig {
            max_attempts: config.contact.max_attempts,
            base_delay: config.contact.base_delay.into(),
            timeout: config.contact.timeout.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_compose_config,
            contact_delivery_config,
        })
    }
}

/// Configured sender, as it appears in the `From` header.
pub fn sender(config: &Config) -> EmailAddressWithName {
    config
        .contact
        .sender
        .clone()
        .with_name(config.contact.sender_name.clone())
}
