//! UseCase: リーダーボード取得処理
//!
//! 削除されておらず、1 回以上対戦した Meal を勝利数または勝率の降順で返します。

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{LeaderboardEntry, LeaderboardSort, MealRepository};

use super::error::KitchenError;

/// リーダーボード取得のユースケース
pub struct GetLeaderboardUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MealRepository>,
}

impl GetLeaderboardUseCase {
    /// 新しい GetLeaderboardUseCase を作成
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// リーダーボードを取得
    ///
    /// # Arguments
    ///
    /// * `sort_by` - `"wins"` または `"win_pct"`
    pub async fn execute(&self, sort_by: &str) -> Result<Vec<LeaderboardEntry>, KitchenError> {
        let sort = sort_by.parse::<LeaderboardSort>().inspect_err(|e| {
            warn!(error = %e, "Rejected leaderboard sort key");
        })?;

        let entries = self.repository.leaderboard(sort).await?;
        info!(%sort, count = entries.len(), "Leaderboard retrieved successfully");

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BattleStats, Difficulty, Meal, MealId, MockMealRepository, Price, ValueObjectError,
    };

    fn entry(id: i64, name: &str, battles: i64, wins: i64) -> LeaderboardEntry {
        LeaderboardEntry::new(
            Meal::new(
                MealId::new(id),
                name,
                "Italian",
                Price::new(10.0).unwrap(),
                Difficulty::Low,
            ),
            BattleStats::from_counts(battles, wins).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_get_leaderboard_sorted_by_wins() {
        // テスト項目: wins 指定で Repository に Wins が渡され、結果がそのまま返される
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_leaderboard()
            .withf(|sort| *sort == LeaderboardSort::Wins)
            .times(1)
            .returning(|_| Ok(vec![entry(1, "Meal A", 5, 4), entry(2, "Meal B", 3, 2)]));
        let usecase = GetLeaderboardUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("wins").await.unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Meal A");
        assert_eq!(result[0].win_pct, 80.0);
        assert_eq!(result[1].win_pct, 66.7);
    }

    #[tokio::test]
    async fn test_get_leaderboard_sorted_by_win_pct() {
        // テスト項目: win_pct 指定で Repository に WinPct が渡される
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository
            .expect_leaderboard()
            .withf(|sort| *sort == LeaderboardSort::WinPct)
            .times(1)
            .returning(|_| Ok(vec![]));
        let usecase = GetLeaderboardUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("win_pct").await;

        // then (期待する結果):
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_leaderboard_invalid_sort_by() {
        // テスト項目: 未知のソートキーはストレージに触れずに InvalidArgument になる
        // given (前提条件):
        let mut repository = MockMealRepository::new();
        repository.expect_leaderboard().never();
        let usecase = GetLeaderboardUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("invalid_sort").await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(KitchenError::InvalidArgument(ValueObjectError::InvalidSortKey(k))) if k == "invalid_sort"
        ));
    }
}
