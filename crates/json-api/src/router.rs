//! App Router

use std::sync::Arc;

use salvo::{
    Router, Service, affix_state::inject, cors::CorsHandler, prelude::CatchPanic,
    trailing_slash::remove_slash,
};

use crate::{
    healthcheck,
    observability::{RequestLogging, metrics_handler},
    products,
    state::State,
};

/// The five product routes under `/api/products`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

/// Everything the server exposes, with shared middleware attached.
pub(crate) fn root_router(state: Arc<State>, request_logging: RequestLogging) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(app_router())
}

/// CORS sits on the service so it also answers preflights that match no route.
pub(crate) fn service(router: Router, cors: CorsHandler) -> Service {
    Service::new(router).hoop(cors)
}
