use anyhow::Context;
use relay_config::Config;
use relay_di::Provide;
use relay_email_contracts::EmailService;
use tracing::info;

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;

    info!(transport = ?config.email.transport, "Connecting to mail channel");
    let email = email::connect(&config.email)?;
    email
        .ping()
        .await
        .context("Failed to reach the mail channel")?;

    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
