//! Database Config

use std::time::Duration;

use clap::Args;

use tms_app::database::PoolOptions;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections (base pool of 5 plus 10 overflow)
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 15_u32)]
    pub db_max_connections: u32,

    /// Seconds after which a pooled connection is recycled
    #[arg(long, env = "DB_MAX_LIFETIME_SECONDS", default_value_t = 3_600_u64)]
    pub db_max_lifetime_seconds: u64,

    /// Apply pending migrations before serving requests
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Pool tuning derived from the configured limits.
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.db_max_connections,
            max_lifetime: Duration::from_secs(self.db_max_lifetime_seconds),
        }
    }
}
