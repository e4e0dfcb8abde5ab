//! Transport Management System JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use tms_app::context::AppContext;

use crate::{
    config::ServerConfig,
    state::{ServiceInfo, State},
};

mod config;
mod extensions;
mod healthcheck;
mod middleware;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod vendors;

/// Transport Management System JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!(
        environment = %config.app.environment,
        project = %config.app.project_name,
        "Starting server on {addr}"
    );

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.pool_options(),
        config.database.run_migrations,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let info = ServiceInfo::new(&config.app.project_name, &config.app.environment);

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(middleware::security_headers)
        .hoop(remove_slash())
        .hoop(inject(State::shared(app, info)))
        .push(router::api_router())
        .push(router::service_router());

    let doc = OpenApi::new("Transport Management System API", env!("CARGO_PKG_VERSION"))
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let mut service = Service::new(router);

    if let Some(cors) = middleware::cors_handler(&config.app.cors_origins) {
        service = service.hoop(cors);
    }

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}
