//! Database operations for invoices and their line items.
//!
//! Invoice submission is all-or-nothing: products, the invoice, line items,
//! medicine units, and the aggregate stock bumps share one transaction.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use farmstead_core::{InvoiceId, InvoiceLineItemId, ProductCategory, ProductId};

use super::RepositoryError;
use crate::models::invoice::{
    Invoice, InvoiceLineItem, InvoiceLineItemWithProduct, InvoiceSubmission,
    InvoiceWithLineItems, StockBump,
};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for invoice queries.
#[derive(Debug, sqlx::FromRow)]
struct InvoiceRow {
    id: i32,
    supplier_name: String,
    invoice_date: NaiveDate,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        Self {
            id: InvoiceId::new(row.id),
            supplier_name: row.supplier_name,
            invoice_date: row.invoice_date,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for line items joined with product info.
#[derive(Debug, sqlx::FromRow)]
struct LineItemWithProductRow {
    id: i32,
    invoice_id: i32,
    product_id: i32,
    quantity: i32,
    unit_price: Decimal,
    created_at: DateTime<Utc>,
    product_name: String,
    category: ProductCategory,
}

impl From<LineItemWithProductRow> for InvoiceLineItemWithProduct {
    fn from(row: LineItemWithProductRow) -> Self {
        Self {
            line_item: InvoiceLineItem {
                id: InvoiceLineItemId::new(row.id),
                invoice_id: InvoiceId::new(row.invoice_id),
                product_id: ProductId::new(row.product_id),
                quantity: row.quantity,
                unit_price: row.unit_price,
                created_at: row.created_at,
            },
            product_name: row.product_name,
            category: row.category,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for invoice database operations.
pub struct InvoiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepository<'a> {
    /// Create a new invoice repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated invoice submission in one transaction.
    ///
    /// Products are found or created by name (an existing product keeps its
    /// category). Medicine lines additionally write their units into the
    /// ledger and bump the aggregate counter by the line quantity, so both
    /// stores agree at creation time.
    ///
    /// Returns the created invoice and one `StockBump` per medicine line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; nothing
    /// is committed in that case.
    pub async fn create_with_line_items(
        &self,
        submission: &InvoiceSubmission,
    ) -> Result<(Invoice, Vec<StockBump>), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let invoice_row = sqlx::query_as::<_, InvoiceRow>(
            r"
            INSERT INTO invoices (supplier_name, invoice_date, notes)
            VALUES ($1, $2, $3)
            RETURNING id, supplier_name, invoice_date, notes, created_at, updated_at
            ",
        )
        .bind(&submission.supplier_name)
        .bind(submission.invoice_date)
        .bind(submission.notes.as_deref())
        .fetch_one(&mut *tx)
        .await?;
        let invoice_id = invoice_row.id;

        let mut bumps = Vec::new();

        for line in &submission.lines {
            // Find or create the product; the no-op DO UPDATE makes
            // RETURNING yield the existing row on conflict.
            let product_id = sqlx::query_scalar::<_, i32>(
                r"
                INSERT INTO products (name, category)
                VALUES ($1, $2)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                ",
            )
            .bind(&line.product_name)
            .bind(line.category)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query(
                r"
                INSERT INTO invoice_line_items (invoice_id, product_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(invoice_id)
            .bind(product_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .execute(&mut *tx)
            .await?;

            if !line.category.requires_unit_tracking() {
                continue;
            }

            for unit in &line.units {
                sqlx::query(
                    r"
                    INSERT INTO medicine_units (
                        product_id, invoice_id, custom_id, expiration_date,
                        first_usage_date, good_for, usage_description
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    ",
                )
                .bind(product_id)
                .bind(invoice_id)
                .bind(&unit.custom_id)
                .bind(unit.expiration_date)
                .bind(unit.first_usage_date)
                .bind(unit.good_for.as_deref())
                .bind(unit.usage_description.as_deref())
                .execute(&mut *tx)
                .await?;
            }

            let total = sqlx::query_scalar::<_, i32>(
                r"
                INSERT INTO medical_stock (product_id, quantity)
                VALUES ($1, $2)
                ON CONFLICT (product_id) DO UPDATE
                    SET quantity = medical_stock.quantity + EXCLUDED.quantity,
                        updated_at = NOW()
                RETURNING quantity
                ",
            )
            .bind(product_id)
            .bind(line.quantity)
            .fetch_one(&mut *tx)
            .await?;

            bumps.push(StockBump {
                product_name: line.product_name.clone(),
                added: line.quantity,
                total,
            });
        }

        tx.commit().await?;

        Ok((invoice_row.into(), bumps))
    }

    /// List all invoices, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Invoice>, RepositoryError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r"
            SELECT id, supplier_name, invoice_date, notes, created_at, updated_at
            FROM invoices
            ORDER BY invoice_date DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get one invoice with its line items and their product info.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_line_items(
        &self,
        id: InvoiceId,
    ) -> Result<Option<InvoiceWithLineItems>, RepositoryError> {
        let invoice = sqlx::query_as::<_, InvoiceRow>(
            r"
            SELECT id, supplier_name, invoice_date, notes, created_at, updated_at
            FROM invoices
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        let Some(invoice) = invoice else {
            return Ok(None);
        };

        let line_items = sqlx::query_as::<_, LineItemWithProductRow>(
            r"
            SELECT
                li.id, li.invoice_id, li.product_id, li.quantity, li.unit_price,
                li.created_at, p.name AS product_name, p.category
            FROM invoice_line_items li
            INNER JOIN products p ON p.id = li.product_id
            WHERE li.invoice_id = $1
            ORDER BY li.id ASC
            ",
        )
        .bind(id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(Some(InvoiceWithLineItems {
            invoice: invoice.into(),
            line_items: line_items.into_iter().map(Into::into).collect(),
        }))
    }
}
