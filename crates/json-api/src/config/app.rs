//! Application Config

use clap::Args;

/// Application identity and HTTP behaviour.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Deployment environment name
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Project name reported by the root and health endpoints
    #[arg(long, env = "PROJECT_NAME", default_value = "Transport-Management-System")]
    pub project_name: String,

    /// Allowed CORS origins, comma separated; CORS is disabled when empty
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',', num_args = 0..)]
    pub cors_origins: Vec<String>,

    /// Threshold for slow request warnings.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}
