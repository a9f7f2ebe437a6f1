//! Runtime configuration, read from flags or `MEALMAX_*` environment variables.

use std::time::Duration;

use clap::Args;

use crate::infrastructure::random::RANDOM_ORG_URL;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/meal_max.db";

#[derive(Debug, Clone, Args)]
pub struct KitchenConfig {
    /// SQLite database URL
    #[arg(long, env = "MEALMAX_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "MEALMAX_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Endpoint returning one plain-text decimal in [0, 1)
    #[arg(long, env = "MEALMAX_RANDOM_URL", default_value = RANDOM_ORG_URL)]
    pub random_url: String,

    /// Deadline for the random number request, in seconds
    #[arg(long, env = "MEALMAX_RANDOM_TIMEOUT_SECS", default_value_t = 5)]
    pub random_timeout_secs: u64,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "MEALMAX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl KitchenConfig {
    pub fn random_timeout(&self) -> Duration {
        Duration::from_secs(self.random_timeout_secs)
    }
}
