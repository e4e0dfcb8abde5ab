//! App Router

use salvo::Router;

use crate::{healthcheck, observability, vendors};

/// Versioned API routes.
///
/// Literal vendor paths are pushed before `{uuid}` so they win the match.
pub(crate) fn api_router() -> Router {
    Router::with_path("api/v1").push(
        Router::with_path("vendors")
            .get(vendors::index::handler)
            .post(vendors::create::handler)
            .push(Router::with_path("search").get(vendors::search::handler))
            .push(Router::with_path("count").get(vendors::count::handler))
            .push(Router::with_path("email/{email}").get(vendors::email::handler))
            .push(Router::with_path("phone/{phone_number}").get(vendors::phone::handler))
            .push(
                Router::with_path("{uuid}")
                    .get(vendors::get::handler)
                    .put(vendors::update::handler)
                    .delete(vendors::delete::handler),
            ),
    )
}

/// Unversioned service routes.
pub(crate) fn service_router() -> Router {
    Router::new()
        .get(healthcheck::welcome)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
}
