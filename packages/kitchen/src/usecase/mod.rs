//! UseCase 層
//!
//! 入力を検証して Domain 層のモデルに変換し、Repository を操作するレイヤー。

pub mod create_meal;
pub mod delete_meal;
pub mod error;
pub mod get_leaderboard;
pub mod get_meal;
pub mod update_meal_stats;

pub use create_meal::CreateMealUseCase;
pub use delete_meal::DeleteMealUseCase;
pub use error::KitchenError;
pub use get_leaderboard::GetLeaderboardUseCase;
pub use get_meal::GetMealUseCase;
pub use update_meal_stats::UpdateMealStatsUseCase;
