//! Database operations for the aggregate medical stock counter.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use farmstead_core::{MedicalStockId, ProductCategory, ProductId};

use super::RepositoryError;
use crate::models::medical_stock::{MedicalStock, MedicalStockWithProduct};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for stock queries.
#[derive(Debug, sqlx::FromRow)]
struct MedicalStockRow {
    id: i32,
    product_id: i32,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MedicalStockRow> for MedicalStock {
    fn from(row: MedicalStockRow) -> Self {
        Self {
            id: MedicalStockId::new(row.id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for stock joined with product info.
#[derive(Debug, sqlx::FromRow)]
struct MedicalStockWithProductRow {
    id: i32,
    product_id: i32,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_name: String,
    category: ProductCategory,
}

impl From<MedicalStockWithProductRow> for MedicalStockWithProduct {
    fn from(row: MedicalStockWithProductRow) -> Self {
        Self {
            stock: MedicalStock {
                id: MedicalStockId::new(row.id),
                product_id: ProductId::new(row.product_id),
                quantity: row.quantity,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            product_name: row.product_name,
            category: row.category,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for aggregate stock database operations.
pub struct MedicalStockRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MedicalStockRepository<'a> {
    /// Create a new medical stock repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all stock records with product name and category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_products(
        &self,
    ) -> Result<Vec<MedicalStockWithProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, MedicalStockWithProductRow>(
            r"
            SELECT
                ms.id, ms.product_id, ms.quantity, ms.created_at, ms.updated_at,
                p.name AS product_name, p.category
            FROM medical_stock ms
            INNER JOIN products p ON p.id = ms.product_id
            ORDER BY p.name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get the stock record for one product, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<MedicalStock>, RepositoryError> {
        let row = sqlx::query_as::<_, MedicalStockRow>(
            r"
            SELECT id, product_id, quantity, created_at, updated_at
            FROM medical_stock
            WHERE product_id = $1
            ",
        )
        .bind(product_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Seed a stock record for a product lacking one.
    ///
    /// Idempotent: when a record already exists it is returned unchanged and
    /// the given quantity is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn seed(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<MedicalStock, RepositoryError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict instead of nothing.
        let row = sqlx::query_as::<_, MedicalStockRow>(
            r"
            INSERT INTO medical_stock (product_id, quantity)
            VALUES ($1, $2)
            ON CONFLICT (product_id) DO UPDATE SET product_id = EXCLUDED.product_id
            RETURNING id, product_id, quantity, created_at, updated_at
            ",
        )
        .bind(product_id.as_i32())
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Add one to a product's counter.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product has no stock record.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn increment(&self, product_id: ProductId) -> Result<MedicalStock, RepositoryError> {
        let row = sqlx::query_as::<_, MedicalStockRow>(
            r"
            UPDATE medical_stock
            SET quantity = quantity + 1, updated_at = NOW()
            WHERE product_id = $1
            RETURNING id, product_id, quantity, created_at, updated_at
            ",
        )
        .bind(product_id.as_i32())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Subtract one from a product's counter, clamped at zero.
    ///
    /// Decrementing an empty counter is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product has no stock record.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn decrement(&self, product_id: ProductId) -> Result<MedicalStock, RepositoryError> {
        let row = sqlx::query_as::<_, MedicalStockRow>(
            r"
            UPDATE medical_stock
            SET quantity = GREATEST(quantity - 1, 0), updated_at = NOW()
            WHERE product_id = $1
            RETURNING id, product_id, quantity, created_at, updated_at
            ",
        )
        .bind(product_id.as_i32())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }
}
