//! UseCase: 対戦成績の更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateMealStatsUseCase::execute() メソッド
//! - 対戦結果（win / loss）の検証と Repository への反映
//!
//! ### なぜこのテストが必要か
//! - 成績カウンタを更新する唯一の経路であり、不正な結果を受け付けてはならない
//! - 削除済み・存在しない Meal の成績は更新されてはならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：win / loss の記録
//! - 異常系：未知の結果文字列、削除済み ID、存在しない ID

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{BattleOutcome, MealId, MealRepository};

use super::error::KitchenError;

/// 対戦成績更新のユースケース
pub struct UpdateMealStatsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MealRepository>,
}

impl UpdateMealStatsUseCase {
    /// 新しい UpdateMealStatsUseCase を作成
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// 対戦結果を記録
    ///
    /// # Arguments
    ///
    /// * `id` - 対象の Meal ID
    /// * `result` - `"win"` または `"loss"`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 記録成功
    /// * `Err(KitchenError)` - 入力不正、存在しない、削除済み、ストレージ障害
    pub async fn execute(&self, id: MealId, result: &str) -> Result<(), KitchenError> {
        // 1. 結果の検証（ストレージに触れる前に行う）
        let outcome = result.parse::<BattleOutcome>().inspect_err(|e| {
            warn!(%id, error = %e, "Rejected battle result");
        })?;

        // 2. 存在確認と更新は Repository 内で 1 トランザクションとして実行
        self.repository.record_battle(id, outcome).await?;
        info!(%id, %outcome, "Meal stats updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MealKey, MockMealRepository, RepositoryError, ValueObjectError};

    #[tokio::test]
    async fn test_update_meal_stats_win() {
        // テスト項目: win を記録すると Repository に Win が渡される
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_record_battle()
            .withf(|id, outcome| *id == MealId::new(1) && *outcome == BattleOutcome::Win)
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateMealStatsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(MealId::new(1), "win").await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_meal_stats_loss() {
        // テスト項目: loss を記録すると Repository に Loss が渡される
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_record_battle()
            .withf(|id, outcome| *id == MealId::new(1) && *outcome == BattleOutcome::Loss)
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateMealStatsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(MealId::new(1), "loss").await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_meal_stats_invalid_result() {
        // テスト項目: 未知の結果はストレージに触れずに InvalidArgument になる
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository.expect_record_battle().never();
        let usecase = UpdateMealStatsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(MealId::new(1), "draw").await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(KitchenError::InvalidArgument(ValueObjectError::InvalidOutcome(r))) if r == "draw"
        ));
    }

    #[tokio::test]
    async fn test_update_meal_stats_deleted() {
        // テスト項目: 削除済みの Meal の成績は更新できない
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_record_battle()
            .times(1)
            .returning(|id, _| Err(RepositoryError::AlreadyDeleted(MealKey::Id(id))));
        let usecase = UpdateMealStatsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(MealId::new(1), "win").await;

        // then (期待する結果):
        assert!(matches!(result, Err(KitchenError::AlreadyDeleted(_))));
    }

    #[tokio::test]
    async fn test_update_meal_stats_not_found() {
        // テスト項目: 存在しない Meal の成績は更新できない
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_record_battle()
            .times(1)
            .returning(|id, _| Err(RepositoryError::NotFound(MealKey::Id(id))));
        let usecase = UpdateMealStatsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(MealId::new(1), "loss").await;

        // then (期待する結果):
        assert!(matches!(result, Err(KitchenError::NotFound(_))));
    }
}
