//! Core domain models for the kitchen.

use serde::{Deserialize, Serialize};

use super::{
    error::{RepositoryError, ValueObjectError},
    value_object::{Difficulty, MealId, MealKey, Price},
};

/// A meal as seen through id/name lookups.
///
/// Battle counters are not part of this projection; see [`LeaderboardEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal identifier
    pub id: MealId,
    /// Unique meal name
    #[serde(rename = "meal")]
    pub name: String,
    /// Cuisine, free text
    pub cuisine: String,
    /// Price, always positive
    pub price: Price,
    /// Preparation difficulty
    pub difficulty: Difficulty,
}

impl Meal {
    /// Create a meal from already validated parts
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: Price,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        }
    }
}

/// A meal that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: Price,
    pub difficulty: Difficulty,
}

impl NewMeal {
    /// Validate raw input into a meal ready for insertion.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::InvalidPrice` or `ValueObjectError::InvalidDifficulty`
    pub fn parse(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: &str,
    ) -> Result<Self, ValueObjectError> {
        Ok(Self {
            name: name.into(),
            cuisine: cuisine.into(),
            price: Price::new(price)?,
            difficulty: difficulty.parse()?,
        })
    }
}

/// Soft-delete lifecycle of a stored meal.
///
/// `Deleted` is terminal: nothing moves a meal back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealStatus {
    #[default]
    Active,
    Deleted,
}

impl MealStatus {
    /// Map the storage flag onto the lifecycle state
    pub fn from_deleted_flag(deleted: bool) -> Self {
        if deleted { Self::Deleted } else { Self::Active }
    }

    /// Reject any logical access to a deleted meal
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::AlreadyDeleted` carrying `key`
    pub fn ensure_active(self, key: MealKey) -> Result<(), RepositoryError> {
        match self {
            Self::Active => Ok(()),
            Self::Deleted => Err(RepositoryError::AlreadyDeleted(key)),
        }
    }
}

/// Battle counters of a meal. `wins <= battles` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleStats {
    battles: u32,
    wins: u32,
}

impl BattleStats {
    /// Build stats from raw storage counters.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::InvalidStats` for negative or overflowing
    /// counters, or when wins exceed battles
    pub fn from_counts(battles: i64, wins: i64) -> Result<Self, ValueObjectError> {
        let invalid = || ValueObjectError::InvalidStats { battles, wins };
        let b = u32::try_from(battles).map_err(|_| invalid())?;
        let w = u32::try_from(wins).map_err(|_| invalid())?;
        if w > b {
            return Err(invalid());
        }
        Ok(Self {
            battles: b,
            wins: w,
        })
    }

    pub fn battles(&self) -> u32 {
        self.battles
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Wins over battles as a percentage rounded to one decimal, `None` before
    /// the first battle
    pub fn win_pct(&self) -> Option<f64> {
        if self.battles == 0 {
            return None;
        }
        let ratio = f64::from(self.wins) / f64::from(self.battles);
        Some((ratio * 1000.0).round() / 10.0)
    }
}

/// One ranked row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    #[serde(rename = "meal")]
    pub name: String,
    pub cuisine: String,
    pub price: Price,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    /// Percentage, one decimal place
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// Combine a meal with its counters
    pub fn new(meal: Meal, stats: BattleStats) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            cuisine: meal.cuisine,
            price: meal.price,
            difficulty: meal.difficulty,
            battles: stats.battles(),
            wins: stats.wins(),
            win_pct: stats.win_pct().unwrap_or(0.0),
        }
    }
}
