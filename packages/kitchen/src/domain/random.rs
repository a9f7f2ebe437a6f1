//! Random number port (floats in `[0, 1)`).

use async_trait::async_trait;

use super::error::RandomError;

#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Fetch one value in `[0, 1)`.
    async fn fetch(&self) -> Result<f64, RandomError>;
}
