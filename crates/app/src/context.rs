//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db, PoolOptions},
    domain::vendors::{PgVendorsService, VendorsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub vendors: Arc<dyn VendorsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(vendors: Arc<dyn VendorsService>) -> Self {
        Self { vendors }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or
    /// when `run_migrations` is set and migrating fails.
    pub async fn from_database_url(
        url: &str,
        options: PoolOptions,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, options)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::new(Arc::new(PgVendorsService::new(Db::new(pool)))))
    }
}
