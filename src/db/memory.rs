//! In-process account store, used by the test suite and for running without Postgres.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{AccountStore, StoreError};
use crate::models::Account;

#[derive(Default)]
pub struct MemoryAccountStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_email: HashMap<String, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|g| g.by_email.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<i64, StoreError> {
        // check and insert under the same lock
        let mut inner = self.inner.lock().map_err(|_| StoreError::Unavailable)?;
        if inner.by_email.contains_key(email) {
            return Err(StoreError::DuplicateEmail);
        }
        inner.next_id += 1;
        let id = inner.next_id;
        inner.by_email.insert(
            email.to_string(),
            Account {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Unavailable)?;
        inner.by_email.get(email).cloned().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryAccountStore::new();
        assert_eq!(store.create("a@b.com", "h1").await.unwrap(), 1);
        assert_eq!(store.create("c@d.com", "h2").await.unwrap(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryAccountStore::new();
        store.create("a@b.com", "h1").await.unwrap();
        assert!(matches!(
            store.create("a@b.com", "h2").await,
            Err(StoreError::DuplicateEmail)
        ));
        assert_eq!(store.find_by_email("a@b.com").await.unwrap().password_hash, "h1");
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let store = MemoryAccountStore::new();
        store.create("a@b.com", "h1").await.unwrap();
        assert!(matches!(
            store.find_by_email("A@B.COM").await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.find_by_email("nobody@b.com").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_with_same_email_succeed_once() {
        let store = Arc::new(MemoryAccountStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create("race@b.com", &format!("h{}", i)).await })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(StoreError::DuplicateEmail) => {}
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.len(), 1);
    }
}
