use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};

use crate::models::ApiResponse;

/// Restrict browser access to the allowed origins.
///
/// Requests carrying an `Origin` header which is not allowed are rejected with
/// 403. Requests without an `Origin` header are passed through.
pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    allowed_origins: &[String],
) -> Router<S> {
    let allowed_origins = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!(origin, "ignoring invalid allowed origin"))
                .ok()
        })
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router
        .layer(cors)
        .layer(from_fn(move |request: Request, next: Next| {
            let allowed = match request.headers().get(header::ORIGIN) {
                Some(origin) if !allowed_origins.contains(origin) => {
                    debug!(?origin, "rejecting request from disallowed origin");
                    false
                }
                _ => true,
            };
            async move {
                if allowed {
                    next.run(request).await
                } else {
                    origin_not_allowed()
                }
            }
        }))
}

fn origin_not_allowed() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::failure("Origin not allowed")),
    )
        .into_response()
}
