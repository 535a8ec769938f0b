use std::{panic::AssertUnwindSafe, sync::Arc};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;
use relay_shared_contracts::id::IdService;

use crate::routes::ErrorResponder;

pub fn add<S: Clone + Send + Sync + 'static, Id: IdService>(
    router: Router<S>,
    errors: Arc<ErrorResponder<Id>>,
) -> Router<S> {
    router.layer(from_fn(move |request: Request, next: Next| {
        let errors = Arc::clone(&errors);
        async move {
            match AssertUnwindSafe(next.run(request)).catch_unwind().await {
                Ok(response) => response,
                Err(_) => errors.internal_server_error(anyhow!("request handler panicked")),
            }
        }
    }))
}
