//! PostgreSQL pool setup and the `products` table DDL.

use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub const PRODUCTS_TABLE: &str = "products";

/// Open the pool, check the connection, and create the products table if missing.
/// Any failure here is meant to abort startup.
pub async fn init_db(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    ensure_products_table(&pool).await?;
    tracing::info!("database ready");
    Ok(pool)
}

pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            nama TEXT NOT NULL,
            harga DOUBLE PRECISION NOT NULL DEFAULT 0,
            stok INTEGER NOT NULL DEFAULT 0
        )
        "#,
        PRODUCTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
