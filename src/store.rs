//! In-memory category collection. Insertion order is kept and observable through `list`.
//!
//! All operations go through one `RwLock`: `list`/`get` share it, mutations take it exclusively.
//! Identifiers come from a counter that only moves forward, so an id freed by `delete` is never
//! handed out again.

use crate::error::AppError;
use crate::model::{seed_categories, Category};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const RESOURCE: &str = "Categories";

#[derive(Debug)]
struct Inner {
    records: Vec<Category>,
    next_id: i64,
}

/// Shared handle to the collection; clones point at the same records.
#[derive(Clone, Debug)]
pub struct CategoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl CategoryStore {
    /// Store holding the three seed records; the next id is 4.
    pub fn seeded() -> Self {
        Self::with_records(seed_categories())
    }

    /// Store holding `records` in the given order. The counter starts past the highest id.
    pub fn with_records(records: Vec<Category>) -> Self {
        let next_id = records.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        CategoryStore {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    pub fn list(&self) -> Vec<Category> {
        self.read().records.clone()
    }

    /// Append `payload` under a freshly allocated id. Any id in the payload is ignored.
    pub fn create(&self, mut payload: Category) -> Category {
        let mut inner = self.write();
        payload.id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(payload.clone());
        tracing::debug!(id = payload.id, "category created");
        payload
    }

    pub fn get(&self, id: i64) -> Result<Category, AppError> {
        self.read()
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::NotFound(RESOURCE))
    }

    /// Replace the record with `id` wholesale; the stored id stays `id` whatever the payload says.
    pub fn update(&self, id: i64, mut payload: Category) -> Result<Category, AppError> {
        let mut inner = self.write();
        let slot = inner
            .records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound(RESOURCE))?;
        payload.id = id;
        *slot = payload.clone();
        Ok(payload)
    }

    /// Remove the record with `id`, shifting later records down by one.
    pub fn delete(&self, id: i64) -> Result<Category, AppError> {
        let mut inner = self.write();
        let idx = inner
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(RESOURCE))?;
        let removed = inner.records.remove(idx);
        tracing::debug!(id, "category deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &CategoryStore) -> Vec<i64> {
        store.list().iter().map(|c| c.id).collect()
    }

    #[test]
    fn seeded_store_lists_in_insertion_order() {
        let store = CategoryStore::seeded();
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.list()[0].nama, "Indomie Godog");
    }

    #[test]
    fn create_appends_with_next_id_and_ignores_payload_id() {
        let store = CategoryStore::seeded();
        let created = store.create(Category::new(99, "Kopi", 5000.0, 5));
        assert_eq!(created, Category::new(4, "Kopi", 5000.0, 5));
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
        assert_eq!(store.get(4).unwrap(), created);
    }

    #[test]
    fn create_accepts_unvalidated_values() {
        let store = CategoryStore::seeded();
        let created = store.create(Category::new(0, "", -1.5, -3));
        assert_eq!(created.nama, "");
        assert_eq!(created.harga, -1.5);
        assert_eq!(created.stok, -3);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = CategoryStore::seeded();
        store.delete(3).unwrap();
        let created = store.create(Category::new(0, "Gula", 15000.0, 2));
        assert_eq!(created.id, 4);
        store.delete(4).unwrap();
        assert_eq!(store.create(Category::default()).id, 5);
        assert_eq!(ids(&store), vec![1, 2, 5]);
    }

    #[test]
    fn update_replaces_wholesale_and_keeps_id() {
        let store = CategoryStore::seeded();
        let updated = store.update(2, Category::new(7, "Air", 3200.0, 35)).unwrap();
        assert_eq!(updated, Category::new(2, "Air", 3200.0, 35));
        assert_eq!(store.get(2).unwrap(), updated);
        assert!(matches!(store.get(7), Err(AppError::NotFound(_))));

        let zeroed = store.update(2, Category { nama: "Air".into(), ..Default::default() }).unwrap();
        assert_eq!(zeroed, Category::new(2, "Air", 0.0, 0));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn delete_preserves_order_and_shrinks_by_one() {
        let store = CategoryStore::seeded();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.nama, "Vit 1000ml");
        assert_eq!(ids(&store), vec![1, 3]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_ids_are_not_found_everywhere() {
        let store = CategoryStore::seeded();
        store.delete(1).unwrap();
        assert!(matches!(store.get(1), Err(AppError::NotFound(_))));
        assert!(matches!(store.update(1, Category::default()), Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(1), Err(AppError::NotFound(_))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = CategoryStore::with_records(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.create(Category::default()).id, 1);
    }

    #[test]
    fn clones_share_the_collection() {
        let store = CategoryStore::seeded();
        let other = store.clone();
        other.delete(1).unwrap();
        assert_eq!(ids(&store), vec![2, 3]);
    }

    // The lock serializes creates, which the unsynchronized `len + 1` scheme could not guarantee.
    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = CategoryStore::seeded();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50).map(|_| store.create(Category::default()).id).collect::<Vec<_>>()
                })
            })
            .collect();
        let mut all: Vec<i64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
        assert_eq!(store.len(), 403);
    }
}
