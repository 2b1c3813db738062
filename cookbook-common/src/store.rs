//! Persistent local storage
//!
//! A string key-value store standing in for browser local storage. The
//! production store is a single SQLite table under the root folder.

use crate::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// String key-value storage shared by the page controllers
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns None if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite the value under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed key-value store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the store file at `db_path`
    pub async fn open(db_path: &Path) -> Result<Self> {
        let newly_created = !db_path.exists();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&db_url)
            .await?;

        if newly_created {
            info!("Initialized new storage: {}", db_path.display());
        } else {
            info!("Opened existing storage: {}", db_path.display());
        }

        create_local_storage_table(&pool).await?;
        Ok(Self { pool })
    }

    /// Store that lives only as long as this value (tests, dry runs)
    pub async fn in_memory() -> Result<Self> {
        // A single connection, otherwise each connection sees its own empty database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        create_local_storage_table(&pool).await?;
        Ok(Self { pool })
    }
}

/// Create the local_storage table
async fn create_local_storage_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value)
            VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
