//! Repository port for meal records.
//!
//! The domain defines the trait; `infrastructure::repository` provides the
//! storage-backed implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{LeaderboardEntry, Meal, NewMeal},
    error::RepositoryError,
    value_object::{BattleOutcome, LeaderboardSort, MealId},
};

/// Storage access for meals.
///
/// Implementations own every mutation of the meal table. Each method is one
/// logical operation: the check-then-act methods (`soft_delete`,
/// `record_battle`) must perform their precondition check and mutation
/// atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Insert a meal with zeroed counters and return its id.
    ///
    /// Fails with `DuplicateName` when the name is taken.
    async fn insert(&self, meal: NewMeal) -> Result<MealId, RepositoryError>;

    /// Mark a meal deleted.
    ///
    /// Fails with `NotFound` or `AlreadyDeleted`.
    async fn soft_delete(&self, id: MealId) -> Result<(), RepositoryError>;

    /// Fetch an active meal by id.
    async fn find_by_id(&self, id: MealId) -> Result<Meal, RepositoryError>;

    /// Fetch an active meal by name.
    async fn find_by_name(&self, name: &str) -> Result<Meal, RepositoryError>;

    /// Apply one battle result to an active meal's counters.
    async fn record_battle(&self, id: MealId, outcome: BattleOutcome)
    -> Result<(), RepositoryError>;

    /// Active meals with at least one battle, ranked by `sort`.
    async fn leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, RepositoryError>;
}
