#![allow(dead_code, reason = "not every helper is used by every test crate")]

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use relay_api_rest::{RestServer, RestServerConfig};
use relay_core_contact_contracts::{ContactFeatureService, ContactReceipt, ContactSendMessageError};
use relay_core_contact_impl::{
    compose::{ContactComposeConfig, ContactComposeServiceImpl},
    delivery::{ContactDeliveryConfig, ContactDeliveryServiceImpl},
    ContactFeatureServiceImpl,
};
use relay_core_health_impl::HealthFeatureServiceImpl;
use relay_demo::contact::{BCC, BRANDING, RECIPIENTS, SENDER};
use relay_di::{provider, Provide};
use relay_email_contracts::{Email, EmailReceipt, EmailService};
use relay_models::{contact::ContactSubmission, RequestId};
use relay_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use relay_templates_impl::TemplateServiceImpl;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "https://example.com";

/// Mail channel which fails a configurable number of times before accepting
/// messages.
#[derive(Debug, Clone, Default)]
pub struct FakeEmailService {
    failures: Arc<AtomicU32>,
    sent: Arc<Mutex<Vec<Email>>>,
    attempts: Arc<AtomicU32>,
}

impl FakeEmailService {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures: Arc::new(failures.into()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl EmailService for FakeEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<EmailReceipt> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let failures = self.failures.load(Ordering::SeqCst);
        if failures > 0 {
            self.failures.store(failures - 1, Ordering::SeqCst);
            anyhow::bail!("connection refused");
        }
        self.sent.lock().unwrap().push(email);
        Ok(EmailReceipt {
            id: format!("fake-{attempt}"),
        })
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Contact service whose handler always panics.
#[derive(Debug, Clone, Copy)]
pub struct PanickingContactService;

impl ContactFeatureService for PanickingContactService {
    async fn send_message(
        &self,
        _request_id: RequestId,
        _submission: ContactSubmission,
    ) -> Result<ContactReceipt, ContactSendMessageError> {
        panic!("something went terribly wrong")
    }
}

provider! {
    TestProvider {
        email: FakeEmailService,
        panicking_contact: PanickingContactService,
        compose_config: ContactComposeConfig,
        delivery_config: ContactDeliveryConfig,
        rest_server_config: RestServerConfig,
    }
}

type Health = HealthFeatureServiceImpl<TimeServiceImpl>;

type Contact = ContactFeatureServiceImpl<
    ContactComposeServiceImpl<TemplateServiceImpl>,
    ContactDeliveryServiceImpl<FakeEmailService>,
>;

fn make_provider(email: FakeEmailService, production: bool) -> TestProvider {
    TestProvider {
        _cache: Default::default(),
        email,
        panicking_contact: PanickingContactService,
        compose_config: ContactComposeConfig {
            sender: SENDER.clone().into(),
            recipients: RECIPIENTS.as_slice().into(),
            bcc: BCC.as_slice().into(),
            branding: BRANDING.clone().into(),
        },
        delivery_config: ContactDeliveryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(10),
            timeout: Duration::from_secs(30),
        },
        rest_server_config: RestServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            allowed_origins: [ALLOWED_ORIGIN.to_owned()].into(),
            production,
        },
    }
}

pub fn make_router(email: FakeEmailService, production: bool) -> Router {
    let mut provider = make_provider(email, production);
    let server: RestServer<IdServiceImpl, Health, Contact> = provider.provide();
    server.router()
}

pub fn make_panicking_router() -> Router {
    let mut provider = make_provider(FakeEmailService::default(), true);
    let server: RestServer<IdServiceImpl, Health, PanickingContactService> = provider.provide();
    server.router()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> (Response<Body>, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, Body::empty()), json)
}
