use relay_core_contact_impl::{
    compose::ContactComposeServiceImpl, delivery::ContactDeliveryServiceImpl,
    ContactFeatureServiceImpl,
};
use relay_core_health_impl::HealthFeatureServiceImpl;
use relay_email_impl::EmailServiceImpl;
use relay_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use relay_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = relay_api_rest::RestServer<Id, HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time>;

pub type ContactFeature = ContactFeatureServiceImpl<ContactCompose, ContactDelivery>;
pub type ContactCompose = ContactComposeServiceImpl<Template>;
pub type ContactDelivery = ContactDeliveryServiceImpl<Email>;
