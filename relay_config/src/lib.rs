use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use relay_models::email_address::EmailAddress;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// Compiled in default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of config files to load on top of the defaults.
pub const CONFIG_PATHS_ENV: &str = "RELAY_CONFIG";

pub const ENV_PREFIX: &str = "RELAY";

const LIST_KEYS: &[&str] = &["http.allowed_origins", "contact.recipients", "contact.bcc"];

/// Load the configuration from the defaults, the files listed in
/// `RELAY_CONFIG` and `RELAY__*` environment variables, in this order.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();

    load_from(&paths, environment())
}

pub fn load_from(paths: &[impl AsRef<Path>], environment: Environment) -> anyhow::Result<Config> {
    let builder = config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(environment)
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// The `RELAY__SECTION__KEY` environment source.
pub fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .try_parsing(true),
        |env, key| env.with_list_parse_key(key),
    )
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub branding: BrandingConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub production: bool,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub transport: EmailTransport,
    pub smtp_url: String,
    pub mailgun: MailgunConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    Smtp,
    Mailgun,
}

#[derive(Debug, Deserialize)]
pub struct MailgunConfig {
    pub base_url: Url,
    pub domain: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub sender_name: String,
    pub sender: EmailAddress,
    pub recipients: Vec<EmailAddress>,
    pub bcc: Vec<EmailAddress>,
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct BrandingConfig {
    pub company_name: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
