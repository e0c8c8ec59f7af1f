//! # Invoice Repository
//!
//! Database operations for saved documents and their line items.
//!
//! ## Save Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Document Save                                     │
//! │                                                                         │
//! │  save(&document)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN TRANSACTION                                                     │
//! │       ├── duplicate-number pre-check  (friendly error)                 │
//! │       ├── INSERT invoices  → generated invoice_id                      │
//! │       ├── INSERT invoice_items (one per line item)                     │
//! │       └── COMMIT                                                       │
//! │                                                                         │
//! │  Any failure before COMMIT drops the transaction guard, which          │
//! │  rolls back every row of this save. Either all rows land or none.      │
//! │                                                                         │
//! │  A document is persisted exactly once: there is no update-in-place.    │
//! │  Re-saving under the same number is rejected as a duplicate.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use quotegen_core::{Document, Money};

// =============================================================================
// Row Types
// =============================================================================

/// One stored document header row.
///
/// Typed mirror of the `invoices` table; dictionary-shaped row access
/// stops at this boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceRow {
    pub invoice_id: i64,
    pub quotation_number: String,
    pub document_type: String,
    pub client_name: String,
    pub client_address: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    /// Cents.
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

impl InvoiceRow {
    /// Returns the stored total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_amount)
    }
}

/// One stored line item row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceItemRow {
    pub item_id: i64,
    pub invoice_id: i64,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Cents.
    pub unit_price: i64,
    /// Cents.
    pub total_price: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for document database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Saves a document as one parent row plus one child row per item.
    ///
    /// ## Atomicity
    /// The whole save runs in a single transaction. If any insert fails,
    /// the transaction guard is dropped and SQLite rolls back everything,
    /// leaving zero rows from this save in either table. The in-memory
    /// document is untouched, so the caller can correct and retry.
    ///
    /// ## Returns
    /// The generated `invoice_id` of the parent row.
    ///
    /// ## Errors
    /// - [`DbError::UniqueViolation`] if the document number already exists
    /// - [`DbError::ConnectionFailed`] if the store is unreachable
    /// - [`DbError::ConstraintViolation`] if a row breaks a CHECK constraint
    pub async fn save(&self, document: &Document) -> DbResult<i64> {
        debug!(number = %document.number, items = document.items.len(), "Saving document");

        let mut tx = self.pool.begin().await?;

        // Friendly duplicate rejection before touching any rows.
        // The UNIQUE index on quotation_number remains the backstop for
        // anything that slips through.
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM invoices WHERE quotation_number = ?1)",
        )
        .bind(&document.number)
        .fetch_one(&mut *tx)
        .await?;

        if exists {
            return Err(DbError::duplicate(
                "invoices.quotation_number",
                &document.number,
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO invoices (
                quotation_number, document_type, client_name,
                client_address, client_phone, client_email,
                total_amount, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&document.number)
        .bind(document.document_type.as_str())
        .bind(&document.client.name)
        .bind(&document.client.address)
        .bind(&document.client.phone)
        .bind(&document.client.email)
        .bind(document.total_amount_cents)
        .bind(document.created_at)
        .execute(&mut *tx)
        .await?;

        let invoice_id = result.last_insert_rowid();

        for item in &document.items {
            sqlx::query(
                r#"
                INSERT INTO invoice_items (
                    invoice_id, product_name, quantity, unit,
                    unit_price, total_price
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(invoice_id)
            .bind(&item.product)
            .bind(item.quantity)
            .bind(item.unit.as_str())
            .bind(item.unit_price_cents)
            .bind(item.line_total().cents())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(invoice_id, number = %document.number, "Document saved");

        Ok(invoice_id)
    }

    /// Gets all stored document rows, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<InvoiceRow>> {
        let rows: Vec<InvoiceRow> = sqlx::query_as(
            r#"
            SELECT
                invoice_id, quotation_number, document_type, client_name,
                client_address, client_phone, client_email,
                total_amount, created_at
            FROM invoices
            ORDER BY invoice_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Looks up a stored document by its number.
    pub async fn find_by_number(&self, number: &str) -> DbResult<Option<InvoiceRow>> {
        let row: Option<InvoiceRow> = sqlx::query_as(
            r#"
            SELECT
                invoice_id, quotation_number, document_type, client_name,
                client_address, client_phone, client_email,
                total_amount, created_at
            FROM invoices
            WHERE quotation_number = ?1
            "#,
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Checks whether a document number is already taken.
    ///
    /// Used by the controller's generate-then-verify loop: a freshly
    /// generated number is only handed to the form once this returns false.
    pub async fn number_exists(&self, number: &str) -> DbResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM invoices WHERE quotation_number = ?1)",
        )
        .bind(number)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Gets all item rows for a stored document, in insertion order.
    pub async fn get_items(&self, invoice_id: i64) -> DbResult<Vec<InvoiceItemRow>> {
        let items: Vec<InvoiceItemRow> = sqlx::query_as(
            r#"
            SELECT
                item_id, invoice_id, product_name, quantity, unit,
                unit_price, total_price
            FROM invoice_items
            WHERE invoice_id = ?1
            ORDER BY item_id
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Deletes a stored document. Child item rows cascade.
    pub async fn delete(&self, invoice_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM invoices WHERE invoice_id = ?1")
            .bind(invoice_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", invoice_id.to_string()));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use quotegen_core::{ClientDetails, DocumentType, LineItem, Unit};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_document(number: &str) -> Document {
        Document {
            document_type: DocumentType::Quotation,
            number: number.to_string(),
            client: ClientDetails {
                name: "Acme Ltd".to_string(),
                address: Some("P.O. Box 99, Nairobi".to_string()),
                phone: Some("+254 700 000000".to_string()),
                email: None,
            },
            items: vec![
                LineItem {
                    product: "Widget".to_string(),
                    quantity: 2.0,
                    unit: Unit::Set,
                    unit_price_cents: 50_000,
                },
                LineItem {
                    product: "Gadget".to_string(),
                    quantity: 1.0,
                    unit: Unit::Dzn,
                    unit_price_cents: 120_000,
                },
            ],
            total_amount_cents: 220_000,
            created_at: Utc::now(),
        }
    }

    async fn item_row_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM invoice_items")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_list_round_trip() {
        let db = test_db().await;
        let document = sample_document("QTN-AAAA1111");

        let invoice_id = db.invoices().save(&document).await.unwrap();
        assert!(invoice_id > 0);

        let rows = db.invoices().list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quotation_number, "QTN-AAAA1111");
        assert_eq!(rows[0].document_type, "Quotation");
        assert_eq!(rows[0].client_name, "Acme Ltd");
        assert_eq!(rows[0].total_amount, 220_000);
        assert_eq!(rows[0].total(), Money::from_cents(220_000));

        let items = db.invoices().get_items(invoice_id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_name, "Widget");
        assert_eq!(items[0].total_price, 100_000);
        assert_eq!(items[1].product_name, "Gadget");
        assert_eq!(items[1].unit, "dzn");
    }

    #[tokio::test]
    async fn test_duplicate_number_rejected_without_altering_rows() {
        let db = test_db().await;

        db.invoices()
            .save(&sample_document("QTN-DUP00001"))
            .await
            .unwrap();

        let mut second = sample_document("QTN-DUP00001");
        second.client.name = "Other Client".to_string();

        let err = db.invoices().save(&second).await.unwrap_err();
        assert!(err.is_duplicate());

        // The original row is intact and no extra items landed
        let rows = db.invoices().list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].client_name, "Acme Ltd");
        assert_eq!(item_row_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_save_is_atomic_on_item_failure() {
        let db = test_db().await;

        // The second item violates the CHECK (quantity > 0) constraint.
        // The ledger never produces such an item; this simulates a failure
        // after the parent insert but before all item inserts.
        let mut document = sample_document("QTN-ATOMIC01");
        document.items.push(LineItem {
            product: "Broken".to_string(),
            quantity: 0.0,
            unit: Unit::Set,
            unit_price_cents: 100,
        });

        let err = db.invoices().save(&document).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));

        // Zero rows in both tables: the parent insert was rolled back too
        assert!(db.invoices().list_all().await.unwrap().is_empty());
        assert_eq!(item_row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_number_exists_and_find_by_number() {
        let db = test_db().await;

        assert!(!db.invoices().number_exists("QTN-LOOKUP01").await.unwrap());
        assert!(db
            .invoices()
            .find_by_number("QTN-LOOKUP01")
            .await
            .unwrap()
            .is_none());

        db.invoices()
            .save(&sample_document("QTN-LOOKUP01"))
            .await
            .unwrap();

        assert!(db.invoices().number_exists("QTN-LOOKUP01").await.unwrap());
        let row = db
            .invoices()
            .find_by_number("QTN-LOOKUP01")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.total_amount, 220_000);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_items() {
        let db = test_db().await;
        let invoice_id = db
            .invoices()
            .save(&sample_document("QTN-CASCADE1"))
            .await
            .unwrap();
        assert_eq!(item_row_count(&db).await, 2);

        db.invoices().delete(invoice_id).await.unwrap();

        assert!(db.invoices().list_all().await.unwrap().is_empty());
        assert_eq!(item_row_count(&db).await, 0);

        // Deleting again reports NotFound
        assert!(matches!(
            db.invoices().delete(invoice_id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let db = test_db().await;
        db.invoices()
            .save(&sample_document("QTN-ORDER001"))
            .await
            .unwrap();
        db.invoices()
            .save(&sample_document("QTN-ORDER002"))
            .await
            .unwrap();

        let rows = db.invoices().list_all().await.unwrap();
        let numbers: Vec<&str> = rows.iter().map(|r| r.quotation_number.as_str()).collect();
        assert_eq!(numbers, vec!["QTN-ORDER001", "QTN-ORDER002"]);
    }
}
