use macros::id;

pub mod contact;
pub mod email_address;
mod macros;

id!(
    /// Assigned to every HTTP request. Correlates the log lines of a request
    /// with the `X-Request-Id` header and the body of its response.
    RequestId
);

id!(
    /// Identifies an internal failure so that a user can reference it when
    /// reporting the issue.
    ErrorId
);
