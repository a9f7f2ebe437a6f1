//! UseCase: Meal 参照処理（ID / 名前）
//!
//! 削除済みの Meal は通常の参照からは見えず、`AlreadyDeleted` で拒否されます。
//! 返される Meal には対戦成績が含まれません（成績はリーダーボードから参照）。

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Meal, MealId, MealRepository};

use super::error::KitchenError;

/// Meal 参照のユースケース
pub struct GetMealUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MealRepository>,
}

impl GetMealUseCase {
    /// 新しい GetMealUseCase を作成
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// ID で Meal を取得
    pub async fn by_id(&self, id: MealId) -> Result<Meal, KitchenError> {
        let meal = self.repository.find_by_id(id).await?;
        debug!(%id, meal = %meal.name, "Fetched meal by id");
        Ok(meal)
    }

    /// 名前で Meal を取得
    pub async fn by_name(&self, name: &str) -> Result<Meal, KitchenError> {
        let meal = self.repository.find_by_name(name).await?;
        debug!(id = %meal.id, meal = name, "Fetched meal by name");
        Ok(meal)
    }
}
