use relay_models::contact::ContactSubmission;
use serde::Deserialize;

/// Missing fields are reported as violations of the respective field instead
/// of rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            phone: value.phone,
            message: value.message.unwrap_or_default(),
        }
    }
}
