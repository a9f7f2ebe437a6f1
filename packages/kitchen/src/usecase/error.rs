//! UseCase 層のエラー定義
//!
//! 呼び出し側はこのエラーで「不正な入力」「存在しない」「削除済み」
//! 「ストレージ障害」を区別できます。

use thiserror::Error;

use crate::domain::{BoxError, MealKey, RepositoryError, ValueObjectError};

/// Kitchen の各ユースケースが返すエラー
#[derive(Debug, Error)]
pub enum KitchenError {
    /// 入力値が不正（ストレージには到達しない）
    #[error(transparent)]
    InvalidArgument(#[from] ValueObjectError),

    /// 同名の Meal が既に存在する
    #[error("Meal with name '{0}' already exists")]
    DuplicateEntity(String),

    /// 該当する Meal が存在しない
    #[error("Meal with {0} not found")]
    NotFound(MealKey),

    /// Meal は存在するが削除済み
    #[error("Meal with {0} has been deleted")]
    AlreadyDeleted(MealKey),

    /// その他のストレージ障害
    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
}

impl From<RepositoryError> for KitchenError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(key) => Self::NotFound(key),
            RepositoryError::AlreadyDeleted(key) => Self::AlreadyDeleted(key),
            RepositoryError::DuplicateName(name) => Self::DuplicateEntity(name),
            RepositoryError::Storage(source) => Self::Storage(source),
        }
    }
}
