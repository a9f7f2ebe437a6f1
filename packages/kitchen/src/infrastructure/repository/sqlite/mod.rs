//! SQLite storage: pool setup, schema, health checks and the meal repository.

pub mod connection;
pub mod health;
pub mod meal;
pub mod migrations;

pub use connection::{connect_in_memory, create_pool};
pub use health::{HealthCheckError, check_database_connection, check_table_exists};
pub use meal::SqliteMealRepository;
pub use migrations::{MEALS_TABLE, migrate};
