//! State

use std::sync::Arc;

use tms_app::context::AppContext;

/// Identity reported by the root and health endpoints.
#[derive(Debug, Clone)]
pub(crate) struct ServiceInfo {
    pub(crate) project_name: String,
    pub(crate) environment: String,
    pub(crate) version: &'static str,
}

impl ServiceInfo {
    #[must_use]
    pub(crate) fn new(project_name: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            environment: environment.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) info: ServiceInfo,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, info: ServiceInfo) -> Self {
        Self { app, info }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, info: ServiceInfo) -> Arc<Self> {
        Arc::new(Self::new(app, info))
    }
}
