//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use axum::{Router, http::StatusCode, routing::get};
use mealmax_kitchen::{
    SqliteMealRepository,
    domain::MealRepository,
    infrastructure::repository::sqlite::{connect_in_memory, create_pool, migrate},
};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

/// Fresh, migrated in-memory store.
pub async fn memory_repository() -> Arc<dyn MealRepository> {
    let pool = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    migrate(&pool).await.expect("Failed to migrate");
    Arc::new(SqliteMealRepository::new(pool))
}

/// Migrated database file opened through the production pool settings.
///
/// The directory is removed on drop.
pub struct FileDatabase {
    dir: PathBuf,
    pub pool: SqlitePool,
}

impl FileDatabase {
    pub async fn open(max_connections: u32) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Clock before epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("mealmax-{}-{nanos}", std::process::id()));
        let url = format!("sqlite://{}", dir.join("meal_max.db").display());

        let pool = create_pool(&url, max_connections)
            .await
            .expect("Failed to open database file");
        migrate(&pool).await.expect("Failed to migrate");
        Self { dir, pool }
    }

    pub fn repository(&self) -> Arc<dyn MealRepository> {
        Arc::new(SqliteMealRepository::new(self.pool.clone()))
    }

    /// Raw `(battles, wins, deleted)` of a row, bypassing the deleted check.
    pub async fn row(&self, id: i64) -> (i64, i64, bool) {
        sqlx::query_as::<_, (i64, i64, bool)>(
            "SELECT battles, wins, deleted FROM meals WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to read meal row")
    }
}

impl Drop for FileDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Local stand-in for random.org.
///
/// Routes:
/// - `/ok` answers `0.42`
/// - `/garbage` answers a non-numeric body
/// - `/out-of-range` answers `1.50`
/// - `/slow` answers after two seconds
/// - `/down` answers 503
pub struct FakeRandomServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeRandomServer {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/ok", get(|| async { "0.42\n" }))
            .route("/garbage", get(|| async { "invalid_response" }))
            .route("/out-of-range", get(|| async { "1.50" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "0.50"
                }),
            )
            .route(
                "/down",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake random server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake random server failed");
        });

        Self { addr, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for FakeRandomServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// URL of a local port with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/ok")
}
