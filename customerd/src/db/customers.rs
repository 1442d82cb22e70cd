//! Customer database operations

use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};
use crate::models::Customer;

/// Customer data-access service
///
/// Sole owner of customer persistence; every read/write of the `customers`
/// table goes through it. Each operation issues one parameterized statement,
/// except updates which confirm existence first.
#[derive(Clone)]
pub struct Customers {
    pool: PgPool,
}

impl Customers {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single record by id
    pub async fn by_id(&self, id: i64) -> ServiceResult<Customer> {
        sqlx::query_as("SELECT id, name, phone, active, created FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Fetch every record, in store order
    pub async fn all(&self) -> ServiceResult<Vec<Customer>> {
        let items = sqlx::query_as("SELECT id, name, phone, active, created FROM customers")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Fetch every record with `active = TRUE`
    pub async fn all_active(&self) -> ServiceResult<Vec<Customer>> {
        let items = sqlx::query_as(
            "SELECT id, name, phone, active, created FROM customers WHERE active = TRUE",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Create (`id == 0`) or update a record, returning the resulting row.
    ///
    /// On create, a `phone` conflict is resolved with a no-op touch so
    /// `RETURNING` yields the pre-existing row instead of a duplicate.
    /// On update, only `name` and `phone` change; `active` and `created`
    /// stay untouched.
    pub async fn save(&self, id: i64, name: &str, phone: &str) -> ServiceResult<Customer> {
        if id == 0 {
            let item = sqlx::query_as(
                r#"
                INSERT INTO customers (name, phone)
                VALUES ($1, $2)
                ON CONFLICT (phone) DO UPDATE SET phone = EXCLUDED.phone
                RETURNING id, name, phone, active, created
                "#,
            )
            .bind(name)
            .bind(phone)
            .fetch_one(&self.pool)
            .await?;
            return Ok(item);
        }

        self.by_id(id).await?;

        let item = sqlx::query_as(
            r#"
            UPDATE customers SET name = $1, phone = $2
            WHERE id = $3
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    /// Delete a record and return its former values
    pub async fn remove_by_id(&self, id: i64) -> ServiceResult<Customer> {
        sqlx::query_as(
            "DELETE FROM customers WHERE id = $1 RETURNING id, name, phone, active, created",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServiceError::NotFound)
    }

    /// Set `active = FALSE`
    pub async fn block_by_id(&self, id: i64) -> ServiceResult<Customer> {
        self.set_active(id, false).await
    }

    /// Set `active = TRUE`
    pub async fn unblock_by_id(&self, id: i64) -> ServiceResult<Customer> {
        self.set_active(id, true).await
    }

    async fn set_active(&self, id: i64, active: bool) -> ServiceResult<Customer> {
        sqlx::query_as(
            r#"
            UPDATE customers SET active = $2
            WHERE id = $1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id)
        .bind(active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServiceError::NotFound)
    }
}
