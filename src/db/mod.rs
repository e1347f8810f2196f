//! Account persistence: the `AccountStore` seam plus PostgreSQL and in-memory backends.

mod accounts;
mod memory;
mod pool;

pub use accounts::PgAccountStore;
pub use memory::MemoryAccountStore;
pub use pool::{create_pool, run_migrations, DbPool};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Account;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("account not found")]
    NotFound,
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
    #[error("account store unavailable")]
    Unavailable,
}

/// Storage for accounts keyed by a unique email.
///
/// Implementations must make the uniqueness check and the insert one atomic
/// step: two concurrent `create` calls with the same email never both succeed.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account and return its assigned id.
    async fn create(&self, email: &str, password_hash: &str) -> Result<i64, StoreError>;

    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError>;
}
