//! sqlite repository for the saved-product set
//!
//! Duplicate policy is insert-or-ignore: the first save of a given
//! external id wins, and the partial unique index created in
//! `database_connection` backs it at the engine level. Saving a product
//! without a real id (sentinel -1) always inserts a new row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::PersistenceError;
use crate::domain::product::SavedProduct;
use crate::domain::repositories::SavedProductRepository;

#[derive(Clone)]
pub struct SqliteSavedProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSavedProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl SavedProductRepository for SqliteSavedProductRepository {
    async fn insert(&self, product: &SavedProduct) -> Result<bool, PersistenceError> {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO saved_products (external_id, title, price, image, saved_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.external_id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.saved_at)
        .execute(&*self.pool)
        .await
        .map_err(PersistenceError::WriteFailed)?;

        let inserted = result.rows_affected() > 0;
        debug!(
            external_id = product.external_id,
            inserted, "saved product insert"
        );
        Ok(inserted)
    }

    async fn delete(&self, external_id: i64) -> Result<bool, PersistenceError> {
        let result = sqlx::query("DELETE FROM saved_products WHERE external_id = ?")
            .bind(external_id)
            .execute(&*self.pool)
            .await
            .map_err(PersistenceError::DeleteFailed)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<SavedProduct>, PersistenceError> {
        let rows = sqlx::query(
            r#"
            SELECT external_id, title, price, image, saved_at
            FROM saved_products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(PersistenceError::ReadFailed)?;

        let products = rows
            .into_iter()
            .map(|row| SavedProduct {
                external_id: row.get::<i64, _>("external_id"),
                title: row.get::<String, _>("title"),
                price: row.get::<f64, _>("price"),
                image: row.get::<String, _>("image"),
                saved_at: row.get::<DateTime<Utc>, _>("saved_at"),
            })
            .collect();

        Ok(products)
    }
}
