//! PostgreSQL account store over the `users` table.

use async_trait::async_trait;
use tracing::debug;

use super::{AccountStore, DbPool, StoreError};
use crate::models::Account;

#[derive(Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Unique violations become `DuplicateEmail`; the constraint on `users.email`
/// is what serialises concurrent signups.
fn map_insert_error(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            debug!(constraint = ?db.constraint(), "duplicate email on insert");
            StoreError::DuplicateEmail
        }
        _ => StoreError::Backend(error),
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<i64, StoreError> {
        let row: (i64,) =
            sqlx::query_as("INSERT INTO users (email, password) VALUES ($1, $2) RETURNING id")
                .bind(email)
                .bind(password_hash)
                .fetch_one(&self.pool)
                .await
                .map_err(map_insert_error)?;
        Ok(row.0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>("SELECT id, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
