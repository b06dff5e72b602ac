//! Database operations for the medicine unit ledger.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use farmstead_core::{InvoiceId, MedicineUnitId, ProductId};

use super::RepositoryError;
use crate::models::medicine_unit::{MedicineUnit, MedicineUnitFilter, UpdateMedicineUnitInput};

/// Internal row type for medicine unit queries.
#[derive(Debug, sqlx::FromRow)]
struct MedicineUnitRow {
    id: i32,
    product_id: i32,
    invoice_id: i32,
    custom_id: String,
    expiration_date: NaiveDate,
    first_usage_date: Option<DateTime<Utc>>,
    is_used: bool,
    is_expired: bool,
    good_for: Option<String>,
    usage_description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MedicineUnitRow> for MedicineUnit {
    fn from(row: MedicineUnitRow) -> Self {
        Self {
            id: MedicineUnitId::new(row.id),
            product_id: ProductId::new(row.product_id),
            invoice_id: InvoiceId::new(row.invoice_id),
            custom_id: row.custom_id,
            expiration_date: row.expiration_date,
            first_usage_date: row.first_usage_date,
            is_used: row.is_used,
            is_expired: row.is_expired,
            good_for: row.good_for,
            usage_description: row.usage_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Columns returned from every unit query, kept in one place.
const UNIT_COLUMNS: &str = "id, product_id, invoice_id, custom_id, expiration_date, \
     first_usage_date, is_used, is_expired, good_for, usage_description, \
     created_at, updated_at";

/// Repository for medicine unit database operations.
pub struct MedicineUnitRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MedicineUnitRepository<'a> {
    /// Create a new medicine unit repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List medicine units, optionally filtered by product and/or invoice.
    ///
    /// Ordered by ID ascending, which matches creation (ordinal) order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        filter: MedicineUnitFilter,
    ) -> Result<Vec<MedicineUnit>, RepositoryError> {
        let query = format!(
            r"
            SELECT {UNIT_COLUMNS}
            FROM medicine_units
            WHERE ($1::int IS NULL OR product_id = $1)
              AND ($2::int IS NULL OR invoice_id = $2)
            ORDER BY id ASC
            "
        );
        let rows = sqlx::query_as::<_, MedicineUnitRow>(&query)
            .bind(filter.product_id.map(|id| id.as_i32()))
            .bind(filter.invoice_id.map(|id| id.as_i32()))
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List all units for one product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<MedicineUnit>, RepositoryError> {
        self.list(MedicineUnitFilter {
            product_id: Some(product_id),
            invoice_id: None,
        })
        .await
    }

    /// Apply a partial update to one unit.
    ///
    /// Flipping `is_used` on stamps `first_usage_date` with the current time
    /// unless the update carries an explicit timestamp or one is already
    /// set. Flipping it off leaves the timestamp in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the unit doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: MedicineUnitId,
        input: &UpdateMedicineUnitInput,
    ) -> Result<MedicineUnit, RepositoryError> {
        let query = format!(
            r"
            UPDATE medicine_units
            SET
                is_used = COALESCE($2, is_used),
                is_expired = COALESCE($3, is_expired),
                first_usage_date = CASE
                    WHEN $4::timestamptz IS NOT NULL THEN $4
                    WHEN $2 IS TRUE AND first_usage_date IS NULL THEN NOW()
                    ELSE first_usage_date
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {UNIT_COLUMNS}
            "
        );
        let row = sqlx::query_as::<_, MedicineUnitRow>(&query)
            .bind(id.as_i32())
            .bind(input.is_used)
            .bind(input.is_expired)
            .bind(input.first_usage_date)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a unit from the ledger.
    ///
    /// The aggregate stock counter is deliberately not adjusted here.
    ///
    /// # Returns
    ///
    /// Returns `true` if the unit was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: MedicineUnitId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM medicine_units
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
