//! Assign each request a unique ID

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    Router,
};
use relay_models::RequestId;
use relay_shared_contracts::id::IdService;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Generates a [`RequestId`] for every request.
///
/// The id is stored in the request extensions, where the trace span and the
/// contact handler pick it up, and is returned in the `X-Request-Id` header.
pub fn add<S: Clone + Send + Sync + 'static, Id: IdService>(
    router: Router<S>,
    id: Arc<Id>,
) -> Router<S> {
    router.layer(from_fn_with_state(id, middleware::<Id>))
}

async fn middleware<Id: IdService>(
    State(id): State<Arc<Id>>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = id.generate::<RequestId>();
    request.extensions_mut().insert(request_id);
    let response = next.run(request).await;
    ([(REQUEST_ID_HEADER, request_id.to_string())], response).into_response()
}
