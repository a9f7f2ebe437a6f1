//! SQLite Meal Repository 実装
//!
//! ドメイン層が定義する MealRepository trait の具体的な実装。
//! DB の行は一度 `MealRow` / `LeaderboardRow` に読み込み、ドメインモデルへ変換します。
//!
//! ```text
//! DB Row → MealRow (FromRow) → Meal (ドメインモデル)
//! ```
//!
//! 削除と成績更新は `deleted = FALSE` を条件にした UPDATE をトランザクションの
//! 最初の文として実行し、書き込みロックを先に取得します（先に SELECT すると
//! 読み取りロックからの昇格で SQLITE_BUSY が即座に返るため）。
//! 影響行数 0 の場合のみ同じトランザクション内で行を読み、`NotFound` と
//! `AlreadyDeleted` を判別します。

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, info, warn};

use crate::domain::{
    BattleOutcome, BattleStats, Difficulty, LeaderboardEntry, LeaderboardSort, Meal, MealId,
    MealKey, MealRepository, MealStatus, NewMeal, Price, RepositoryError, ValueObjectError,
};

#[derive(Debug, sqlx::FromRow)]
struct MealRow {
    id: i64,
    meal: String,
    cuisine: String,
    price: f64,
    difficulty: String,
    deleted: bool,
}

impl MealRow {
    fn into_meal(self) -> Result<(Meal, MealStatus), ValueObjectError> {
        let meal = Meal::new(
            MealId::new(self.id),
            self.meal,
            self.cuisine,
            Price::new(self.price)?,
            self.difficulty.parse::<Difficulty>()?,
        );
        Ok((meal, MealStatus::from_deleted_flag(self.deleted)))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LeaderboardRow {
    id: i64,
    meal: String,
    cuisine: String,
    price: f64,
    difficulty: String,
    battles: i64,
    wins: i64,
}

impl TryFrom<LeaderboardRow> for LeaderboardEntry {
    type Error = ValueObjectError;

    fn try_from(row: LeaderboardRow) -> Result<Self, Self::Error> {
        let stats = BattleStats::from_counts(row.battles, row.wins)?;
        let meal = Meal::new(
            MealId::new(row.id),
            row.meal,
            row.cuisine,
            Price::new(row.price)?,
            row.difficulty.parse::<Difficulty>()?,
        );
        Ok(LeaderboardEntry::new(meal, stats))
    }
}

/// Log a storage fault and wrap it for the caller.
fn storage_error(context: &'static str, err: impl Into<crate::domain::BoxError>) -> RepositoryError {
    let err = err.into();
    error!(context, error = %err, "Database error");
    RepositoryError::storage(err)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// SQLite-backed Meal Repository
///
/// ドメイン層の MealRepository trait を実装します（依存性の逆転）。
#[derive(Clone)]
pub struct SqliteMealRepository {
    pool: SqlitePool,
}

impl SqliteMealRepository {
    /// 新しい SqliteMealRepository を作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Explain why a conditional update touched no row.
    ///
    /// Runs inside the writing transaction, so the answer reflects the state
    /// the update saw.
    async fn explain_miss(
        tx: &mut Transaction<'_, Sqlite>,
        id: MealId,
    ) -> RepositoryError {
        let lookup = sqlx::query_scalar::<_, bool>("SELECT deleted FROM meals WHERE id = ?1")
            .bind(id.value())
            .fetch_optional(&mut **tx)
            .await;
        let deleted = match lookup {
            Ok(deleted) => deleted,
            Err(e) => return storage_error("select deleted flag", e),
        };

        let key = MealKey::Id(id);
        match deleted {
            None => {
                info!(%id, "Meal not found");
                RepositoryError::NotFound(key)
            }
            Some(flag) => match MealStatus::from_deleted_flag(flag).ensure_active(key) {
                Err(e) => {
                    info!(%id, "Meal has already been deleted");
                    e
                }
                // An active row always matches the update.
                Ok(()) => storage_error(
                    "conditional update",
                    format!("active meal {id} was not updated"),
                ),
            },
        }
    }

    async fn find_one(&self, key: MealKey) -> Result<Meal, RepositoryError> {
        const SELECT: &str = "SELECT id, meal, cuisine, price, difficulty, deleted FROM meals";

        let row = match &key {
            MealKey::Id(id) => {
                sqlx::query_as::<_, MealRow>(&format!("{SELECT} WHERE id = ?1"))
                    .bind(id.value())
                    .fetch_optional(&self.pool)
                    .await
            }
            MealKey::Name(name) => {
                sqlx::query_as::<_, MealRow>(&format!("{SELECT} WHERE meal = ?1"))
                    .bind(name.as_str())
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(|e| storage_error("select meal", e))?;

        let Some(row) = row else {
            info!(%key, "Meal not found");
            return Err(RepositoryError::NotFound(key));
        };

        let (meal, status) = row
            .into_meal()
            .map_err(|e| storage_error("decode meal row", e))?;
        status
            .ensure_active(key)
            .inspect_err(|e| info!(error = %e, "Rejected lookup of deleted meal"))?;
        Ok(meal)
    }
}

#[async_trait]
impl MealRepository for SqliteMealRepository {
    async fn insert(&self, meal: NewMeal) -> Result<MealId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO meals (meal, cuisine, price, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&meal.name)
        .bind(&meal.cuisine)
        .bind(meal.price.value())
        .bind(meal.difficulty.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(MealId::new(done.last_insert_rowid())),
            Err(e) if is_unique_violation(&e) => {
                warn!(meal = %meal.name, "Duplicate meal name");
                Err(RepositoryError::DuplicateName(meal.name))
            }
            Err(e) => Err(storage_error("insert meal", e)),
        }
    }

    async fn soft_delete(&self, id: MealId) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin delete", e))?;

        let done = sqlx::query("UPDATE meals SET deleted = TRUE WHERE id = ?1 AND deleted = FALSE")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("mark meal deleted", e))?;
        if done.rows_affected() != 1 {
            return Err(Self::explain_miss(&mut tx, id).await);
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("commit delete", e))
    }

    async fn find_by_id(&self, id: MealId) -> Result<Meal, RepositoryError> {
        self.find_one(MealKey::Id(id)).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Meal, RepositoryError> {
        self.find_one(MealKey::Name(name.to_string())).await
    }

    async fn record_battle(
        &self,
        id: MealId,
        outcome: BattleOutcome,
    ) -> Result<(), RepositoryError> {
        let sql = match outcome {
            BattleOutcome::Win => {
                "UPDATE meals SET battles = battles + 1, wins = wins + 1 WHERE id = ?1 AND deleted = FALSE"
            }
            BattleOutcome::Loss => {
                "UPDATE meals SET battles = battles + 1 WHERE id = ?1 AND deleted = FALSE"
            }
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin stats update", e))?;

        let done = sqlx::query(sql)
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("update meal stats", e))?;
        if done.rows_affected() != 1 {
            return Err(Self::explain_miss(&mut tx, id).await);
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("commit stats update", e))
    }

    async fn leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, RepositoryError> {
        let order_by = match sort {
            LeaderboardSort::Wins => "wins DESC, id ASC",
            LeaderboardSort::WinPct => "(wins * 1.0 / battles) DESC, id ASC",
        };
        let sql = format!(
            r#"
            SELECT id, meal, cuisine, price, difficulty, battles, wins
            FROM meals
            WHERE deleted = FALSE AND battles > 0
            ORDER BY {order_by}
            "#
        );

        let rows = sqlx::query_as::<_, LeaderboardRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("select leaderboard", e))?;

        rows.into_iter()
            .map(|row| {
                LeaderboardEntry::try_from(row).map_err(|e| storage_error("decode leaderboard row", e))
            })
            .collect()
    }
}
