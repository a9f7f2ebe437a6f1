//! UseCase: Meal 削除処理（論理削除）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteMealUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 削除は一度きりの状態遷移（Active → Deleted）であることを保証する
//! - 存在しない ID と削除済み ID を区別して返す必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：Active な Meal の削除
//! - 異常系：存在しない ID、削除済み ID

use std::sync::Arc;

use tracing::info;

use crate::domain::{MealId, MealRepository};

use super::error::KitchenError;

/// Meal 削除のユースケース
pub struct DeleteMealUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MealRepository>,
}

impl DeleteMealUseCase {
    /// 新しい DeleteMealUseCase を作成
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// Meal を削除済みにする
    ///
    /// 行は物理削除されず、以後の参照・更新は `AlreadyDeleted` で拒否されます。
    pub async fn execute(&self, id: MealId) -> Result<(), KitchenError> {
        self.repository.soft_delete(id).await?;
        info!(%id, "Meal marked as deleted");
        Ok(())
    }
}
