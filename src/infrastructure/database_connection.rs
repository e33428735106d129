// Database connection and pool management
// This module handles the sqlite saved-products database using sqlx

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create database file and parent directory if they don't exist
        let db_path = if database_url.starts_with("sqlite://") {
            database_url.trim_start_matches("sqlite://")
        } else if database_url.starts_with("sqlite:") {
            database_url.trim_start_matches("sqlite:")
        } else {
            database_url
        };

        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            if !Path::new(db_path).exists() {
                std::fs::File::create(db_path)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the saved-products schema. Idempotent; run on every start.
    ///
    /// Uniqueness on `external_id` is enforced by a partial unique index
    /// so the sentinel id -1 (products saved without a real id) may
    /// repeat while every real id stays unique.
    pub async fn migrate(&self) -> Result<()> {
        let create_saved_products_sql = r#"
            CREATE TABLE IF NOT EXISTS saved_products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                external_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                price REAL NOT NULL DEFAULT 0,
                image TEXT NOT NULL DEFAULT '',
                saved_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
        "#;

        let create_unique_index_sql = r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_saved_products_external_id
            ON saved_products (external_id)
            WHERE external_id != -1
        "#;

        sqlx::query(create_saved_products_sql)
            .execute(&self.pool)
            .await?;
        sqlx::query(create_unique_index_sql)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn connection_creates_file_and_schema() -> Result<()> {
        let temp_dir = tempdir()?;
        let db_path = temp_dir.path().join("nested").join("test.db");
        let database_url = format!("sqlite:{}", db_path.to_string_lossy());

        let connection = DatabaseConnection::new(&database_url).await?;
        connection.migrate().await?;
        assert!(db_path.exists());

        // Migration is idempotent
        connection.migrate().await?;

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM saved_products")
            .fetch_one(connection.pool())
            .await?;
        assert_eq!(count.0, 0);
        Ok(())
    }
}
