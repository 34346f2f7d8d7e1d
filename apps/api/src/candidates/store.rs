//! Candidate record store.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>` so a durable backend can
//! replace `InMemoryCandidateStore` without touching handlers.

use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::candidates::models::Candidate;
use crate::errors::AppError;

#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Candidate>, AppError>;

    /// Inserts a new record. Fails if the id is already taken.
    async fn put(&self, candidate: Candidate) -> Result<(), AppError>;

    /// Removes and returns the record, or `None` if it was absent.
    async fn delete(&self, id: Uuid) -> Result<Option<Candidate>, AppError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Candidate>, AppError>;
}

#[derive(Default)]
struct Table {
    records: HashMap<Uuid, Candidate>,
    order: Vec<Uuid>,
}

/// Process-local store. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryCandidateStore {
    table: RwLock<Table>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn get(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        Ok(self.table.read().await.records.get(&id).cloned())
    }

    async fn put(&self, candidate: Candidate) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if table.records.contains_key(&candidate.id) {
            return Err(AppError::Internal(anyhow!(
                "candidate {} already exists",
                candidate.id
            )));
        }
        table.order.push(candidate.id);
        table.records.insert(candidate.id, candidate);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        let mut table = self.table.write().await;
        let removed = table.records.remove(&id);
        if removed.is_some() {
            table.order.retain(|existing| *existing != id);
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.records.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::models::sample_candidate;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryCandidateStore::new();
        let c = sample_candidate("Asha", &["Rust"], 2.0, 2020);
        store.put(c.clone()).await.unwrap();
        assert_eq!(store.get(c.id).await.unwrap(), Some(c));
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = InMemoryCandidateStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = InMemoryCandidateStore::new();
        let c = sample_candidate("Asha", &[], 2.0, 2020);
        store.put(c.clone()).await.unwrap();
        assert!(store.put(c).await.is_err());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryCandidateStore::new();
        for name in ["Zed", "Amy", "Mo"] {
            store.put(sample_candidate(name, &[], 1.0, 2020)).await.unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.full_name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Mo"]);
    }

    #[tokio::test]
    async fn test_delete_removes_record_and_order() {
        let store = InMemoryCandidateStore::new();
        let keep = sample_candidate("Keep", &[], 1.0, 2020);
        let gone = sample_candidate("Gone", &[], 1.0, 2020);
        store.put(keep.clone()).await.unwrap();
        store.put(gone.clone()).await.unwrap();

        assert_eq!(store.delete(gone.id).await.unwrap(), Some(gone.clone()));
        assert!(store.get(gone.id).await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap(), vec![keep]);
        assert!(store.delete(gone.id).await.unwrap().is_none());
    }
}
