use crate::domain::bank_order::BankOrder;
use crate::domain::ports::BankOrderStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    orders: BTreeMap<u64, BankOrder>,
    last_id: u64,
}

/// A thread-safe in-memory store for bank orders.
///
/// Clones share the same underlying map, so a test can keep a handle while the
/// builder owns another. Ids are assigned sequentially from 1.
#[derive(Default, Clone)]
pub struct InMemoryBankOrderStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryBankOrderStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BankOrderStore for InMemoryBankOrderStore {
    async fn save(&self, mut order: BankOrder) -> Result<BankOrder> {
        let mut inner = self.inner.write().await;
        let id = match order.id {
            Some(id) => id,
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };
        inner.last_id = inner.last_id.max(id);
        order.id = Some(id);
        inner.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: u64) -> Result<Option<BankOrder>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<BankOrder>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> BankOrder {
        serde_json::from_str(include_str!("../../tests/fixtures/bank_order.json")).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryBankOrderStore::new();

        let first = store.save(order()).await.unwrap();
        let second = store.save(order()).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.get(1).await.unwrap().unwrap(), first);
        assert!(store.get(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_existing_overwrites() {
        let store = InMemoryBankOrderStore::new();
        let mut saved = store.save(order()).await.unwrap();
        saved.name = "renamed".to_string();

        store.save(saved.clone()).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "renamed");
    }

    #[tokio::test]
    async fn test_explicit_id_moves_counter() {
        let store = InMemoryBankOrderStore::new();
        let mut explicit = order();
        explicit.id = Some(10);
        store.save(explicit).await.unwrap();

        let next = store.save(order()).await.unwrap();
        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryBankOrderStore::new();
        let handle = store.clone();
        store.save(order()).await.unwrap();
        assert_eq!(handle.get_all().await.unwrap().len(), 1);
    }
}
