//! Database operations for products.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use farmstead_core::{ProductCategory, ProductId};

use super::RepositoryError;
use crate::models::product::Product;

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    category: ProductCategory,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, category, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Find a product by name, creating it if missing.
    ///
    /// An existing product keeps its category; the one passed here only
    /// applies on first creation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_or_create(
        &self,
        name: &str,
        category: ProductCategory,
    ) -> Result<Product, RepositoryError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict instead of nothing.
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, category)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, category, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(category)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
