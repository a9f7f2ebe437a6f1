//! Liveness checks for the backing database.
use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthCheckError {
    #[error("database connection check failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("table '{0}' does not exist")]
    MissingTable(String),

    #[error("table check failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Run a trivial query to prove a connection can be acquired and used.
pub async fn check_database_connection(pool: &SqlitePool) -> Result<(), HealthCheckError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(HealthCheckError::Connection)?;
    Ok(())
}

/// Fail unless `table` exists in the schema.
pub async fn check_table_exists(pool: &SqlitePool, table: &str) -> Result<(), HealthCheckError> {
    let found: Option<i64> = sqlx::query_scalar(
        r#"SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1"#,
    )
    .bind(table)
    .fetch_optional(pool)
    .await
    .map_err(HealthCheckError::Query)?;

    match found {
        Some(_) => Ok(()),
        None => Err(HealthCheckError::MissingTable(table.to_string())),
    }
}
