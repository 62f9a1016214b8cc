//! Product persistence behind a trait so the service can run against PostgreSQL or an in-memory double.

use crate::database::PRODUCTS_TABLE;
use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;
    /// Insert and return the stored row with its assigned id. The input id is ignored.
    async fn create(&self, product: &Product) -> Result<Product, AppError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError>;
    /// Returns `None` when no row has `id`.
    async fn update(&self, id: i32, product: &Product) -> Result<Option<Product>, AppError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT id, nama, harga, stok FROM {} ORDER BY id", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, product: &Product) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO {} (nama, harga, stok) VALUES ($1, $2, $3) RETURNING id, nama, harga, stok",
            PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.nama)
            .bind(product.harga)
            .bind(product.stok)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT id, nama, harga, stok FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, product: &Product) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE {} SET nama = $1, harga = $2, stok = $3 WHERE id = $4 RETURNING id, nama, harga, stok",
            PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.nama)
            .bind(product.harga)
            .bind(product.stok)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
