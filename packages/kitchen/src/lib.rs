//! Meal records with win/loss battle statistics.
//!
//! This library provides the record store for meals (create, soft delete,
//! lookups, stat updates and the leaderboard) on top of SQLite, plus a
//! random.org client used to decide battle outcomes.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

// Re-export entry points
pub use config::KitchenConfig;
pub use infrastructure::random::RandomOrgClient;
pub use infrastructure::repository::SqliteMealRepository;
pub use usecase::KitchenError;
