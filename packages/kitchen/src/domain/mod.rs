//! Domain layer for the kitchen.
//!
//! This module contains business rules that are independent of storage and
//! transport concerns.

pub mod entity;
pub mod error;
pub mod random;
pub mod repository;
pub mod value_object;

pub use entity::{BattleStats, LeaderboardEntry, Meal, MealStatus, NewMeal};
pub use error::{BoxError, RandomError, RepositoryError, ValueObjectError};
pub use random::RandomSource;
pub use repository::MealRepository;
pub use value_object::{BattleOutcome, Difficulty, LeaderboardSort, MealId, MealKey, Price};

#[cfg(test)]
pub use repository::MockMealRepository;
