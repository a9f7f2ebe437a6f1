//! Database migrations: create the meals table.
use sqlx::SqlitePool;
use tracing::info;

pub const MEALS_TABLE: &str = "meals";

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("DB migrate start");

    let ddls = [r#"
      CREATE TABLE IF NOT EXISTS meals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meal TEXT NOT NULL UNIQUE,
        cuisine TEXT NOT NULL,
        price REAL NOT NULL,
        difficulty TEXT NOT NULL CHECK(difficulty IN ('LOW', 'MED', 'HIGH')),
        battles INTEGER NOT NULL DEFAULT 0,
        wins INTEGER NOT NULL DEFAULT 0,
        deleted BOOLEAN NOT NULL DEFAULT FALSE
      )"#];

    for ddl in ddls {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("DB migrate done");
    Ok(())
}
