//! Healthcheck and welcome handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let info = &depot.state()?.info;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: info.project_name.clone(),
        version: info.version.to_string(),
    }))
}

/// Welcome response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Service status
    pub status: String,

    /// Greeting
    pub message: String,

    /// Service version
    pub version: String,

    /// Project name
    pub project: String,

    /// Deployment environment
    pub environment: String,

    /// Location of the interactive API documentation
    pub docs_url: String,
}

/// Welcome handler
#[endpoint(tags("health"), summary = "Service information")]
pub(crate) async fn welcome(depot: &mut Depot) -> Result<Json<WelcomeResponse>, StatusError> {
    let info = &depot.state()?.info;

    Ok(Json(WelcomeResponse {
        status: "success".to_string(),
        message: "Welcome to the Transport Management System".to_string(),
        version: info.version.to_string(),
        project: info.project_name.clone(),
        environment: info.environment.clone(),
        docs_url: "/docs".to_string(),
    }))
}
