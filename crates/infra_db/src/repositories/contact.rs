//! Contact repository
//!
//! Parameterized CRUD on the `contacts` table
//! (`id, first_name, last_name, email, phone`). The caller-facing
//! `mobile_number` field maps to the `phone` column; that translation
//! belongs to the adapter, not here — the repository speaks column names.
//!
//! Queries are runtime-checked (`sqlx::query_as` with `?` placeholders), so
//! the crate compiles without a live database.

use serde::Serialize;
use sqlx::FromRow;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// A row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Column values for inserting a contact.
#[derive(Debug, Clone)]
pub struct NewContactRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Repository for the `contacts` table.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: DatabasePool,
}

impl ContactRepository {
    /// Creates a new repository over the given connection pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a contact row and returns the assigned identifier.
    pub async fn insert(&self, contact: NewContactRow) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO contacts (first_name, last_name, email, phone) VALUES (?, ?, ?, ?)",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.last_insert_id() as i64)
    }

    /// Fetches a contact row by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT id, first_name, last_name, email, phone FROM contacts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(row)
    }

    /// Updates the mutable columns (`email`, `phone`) of a contact row.
    ///
    /// Name columns are never touched by this statement. Returns the number
    /// of affected rows; MySQL reports zero both for a missing id and for a
    /// no-op update, so callers must not read absence out of a zero.
    pub async fn update_details(
        &self,
        id: i64,
        email: &str,
        phone: &str,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE contacts SET email = ?, phone = ? WHERE id = ?")
            .bind(email)
            .bind(phone)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.rows_affected())
    }

    /// Deletes a contact row by id. Returns the number of deleted rows.
    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.rows_affected())
    }
}
