//! # Product Repository
//!
//! Database operations for the standalone product catalog.
//!
//! This is an isolated minor feature: the `products` table has no relation
//! to invoices and is only reachable through `add_product` / list. It is
//! kept deliberately separate so the document pipeline cannot grow an
//! accidental dependency on it.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use quotegen_core::Money;

/// One stored product row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductRow {
    pub product_id: i64,
    pub name: String,
    pub quantity: f64,
    /// Cents.
    pub price: i64,
}

impl ProductRow {
    /// Returns the stored price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price)
    }
}

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Adds a product to the catalog.
    ///
    /// ## Returns
    /// The generated `product_id`.
    pub async fn add_product(&self, name: &str, quantity: f64, price: Money) -> DbResult<i64> {
        debug!(name = %name, "Adding product");

        let result = sqlx::query(
            "INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)",
        )
        .bind(name)
        .bind(quantity)
        .bind(price.cents())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Retrieves all products, oldest first.
    pub async fn get_all_products(&self) -> DbResult<Vec<ProductRow>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT product_id, name, quantity, price FROM products ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_add_and_list_products() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let id = db
            .products()
            .add_product("Cat-6 cable", 40.0, Money::from_cents(2_500))
            .await
            .unwrap();
        assert!(id > 0);

        db.products()
            .add_product("Patch panel", 2.0, Money::from_cents(450_000))
            .await
            .unwrap();

        let rows = db.products().get_all_products().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Cat-6 cable");
        assert_eq!(rows[0].price(), Money::from_cents(2_500));
        assert_eq!(rows[1].quantity, 2.0);
    }

    #[tokio::test]
    async fn test_empty_catalog_lists_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.products().get_all_products().await.unwrap().is_empty());
    }
}
