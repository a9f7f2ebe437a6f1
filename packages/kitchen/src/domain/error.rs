//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::MealKey;

/// Boxed error used to carry storage faults without tying the domain to a driver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueObjectError {
    /// Price is not a finite number greater than zero
    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    /// Difficulty is not one of the known levels
    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    /// Battle result is neither a win nor a loss
    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidOutcome(String),

    /// Leaderboard sort key is not supported
    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortKey(String),

    /// Counters are negative, overflow, or record more wins than battles
    #[error("Invalid battle stats: {wins} wins out of {battles} battles")]
    InvalidStats { battles: i64, wins: i64 },
}

/// Errors returned by a [`MealRepository`](super::MealRepository) implementation
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row exists for the key
    #[error("Meal with {0} not found")]
    NotFound(MealKey),

    /// The row exists but has been soft-deleted
    #[error("Meal with {0} has been deleted")]
    AlreadyDeleted(MealKey),

    /// The storage engine rejected the insert because the name is taken
    #[error("Meal with name '{0}' already exists")]
    DuplicateName(String),

    /// Any other storage fault
    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
}

impl RepositoryError {
    /// Wrap an arbitrary storage fault.
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }
}

/// Errors returned by a [`RandomSource`](super::RandomSource)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The provider did not answer within the deadline
    #[error("Request to random source timed out")]
    Timeout,

    /// Transport failure or non-success response
    #[error("Request to random source failed: {0}")]
    Unavailable(String),

    /// The payload is not a decimal number in [0, 1)
    #[error("Invalid response from random source: {0}")]
    InvalidResponse(String),
}
