//! UseCase: Meal 作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateMealUseCase::execute() メソッド
//! - 入力検証（価格・難易度）とストレージへの登録
//!
//! ### なぜこのテストが必要か
//! - 不正な入力はストレージに到達する前に拒否されなければならない
//! - 名前の重複は DuplicateEntity として呼び出し側に返す必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：有効な Meal の登録
//! - 異常系：価格が 0 以下、未知の難易度、名前の重複、ストレージ障害

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{MealId, MealRepository, NewMeal};

use super::error::KitchenError;

/// Meal 作成のユースケース
pub struct CreateMealUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MealRepository>,
}

impl CreateMealUseCase {
    /// 新しい CreateMealUseCase を作成
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// Meal 作成を実行
    ///
    /// # Arguments
    ///
    /// * `name` - Meal の名前（一意）
    /// * `cuisine` - 料理のジャンル
    /// * `price` - 価格（0 より大きいこと）
    /// * `difficulty` - 難易度（`LOW` / `MED` / `HIGH`）
    ///
    /// # Returns
    ///
    /// * `Ok(MealId)` - 採番された ID
    /// * `Err(KitchenError)` - 作成失敗
    pub async fn execute(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: &str,
    ) -> Result<MealId, KitchenError> {
        // 1. 入力検証（ストレージに触れる前に行う）
        let meal = NewMeal::parse(name, cuisine, price, difficulty).inspect_err(|e| {
            warn!(meal = name, error = %e, "Rejected meal creation");
        })?;

        // 2. Repository に登録
        let id = self.repository.insert(meal).await?;
        info!(meal = name, %id, "Meal successfully added to the database");

        Ok(id)
    }
}
