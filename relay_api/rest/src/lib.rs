use std::{net::IpAddr, sync::Arc};

use axum::Router;
use relay_core_contact_contracts::ContactFeatureService;
use relay_core_health_contracts::HealthFeatureService;
use relay_di::Build;
use relay_shared_contracts::id::IdService;
use routes::ErrorResponder;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Id, Health, Contact> {
    id: Id,
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins which may call the API from a browser, e.g.
    /// `https://example.com`.
    pub allowed_origins: Arc<[String]>,
    /// Whether to hide error details from clients.
    pub production: bool,
}

impl<Id, Health, Contact> RestServer<Id, Health, Contact>
where
    Id: IdService,
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let (host, port) = (self.config.host, self.config.port);
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let id = Arc::new(self.id);
        let errors = Arc::new(ErrorResponder {
            id: Arc::clone(&id),
            production: self.config.production,
        });

        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::contact::router(
                Arc::new(self.contact),
                Arc::clone(&errors),
            ));

        let router = middlewares::panic_handler::add(router, errors);
        let router = middlewares::cors::add(router, &self.config.allowed_origins);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router, id)
    }
}
