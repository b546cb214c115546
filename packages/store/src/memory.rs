use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::Todo;
use crate::repo::{StoreError, TodoStore};

/// In-memory TodoStore used by the test suites.
///
/// Assigned ids are zero-padded hex counters so that the BTreeMap's
/// lexicographic order matches insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    todos: Arc<Mutex<BTreeMap<String, Todo>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{n:012x}")
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        self.todos
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        if todo.id.is_some() {
            return Err(StoreError::IdAlreadyExists);
        }
        let id = self.assign_id();
        todo.id = Some(id.clone());
        self.todos.lock().unwrap().insert(id, todo.clone());
        Ok(todo)
    }

    async fn upsert(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        // An id-less or unknown todo is created instead of updated.
        let id = todo.id.clone().unwrap_or_else(|| self.assign_id());
        let mut todos = self.todos.lock().unwrap();
        todo.id = Some(id.clone());
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.todos
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_an_id() {
        let store = MemoryStore::new();

        assert!(store.list().await.unwrap().is_empty());

        let created = store.insert(Todo::new(None, "buy milk", false)).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.text, "buy milk");
        assert!(!created.done);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn insert_with_existing_id_fails() {
        let store = MemoryStore::new();

        let err = store
            .insert(Todo {
                id: Some("existing_id".to_string()),
                text: "nope".to_string(),
                done: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::IdAlreadyExists);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_returns_not_found_for_missing_id() {
        let store = MemoryStore::new();
        let err = store.get("missing").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn upsert_replaces_an_existing_todo() {
        let store = MemoryStore::new();
        let created = store.insert(Todo::new(None, "draft", false)).await.unwrap();

        let mut updated = created.clone();
        updated.text = "final".to_string();
        updated.done = true;
        store.upsert(updated).await.unwrap();

        let fetched = store.get(created.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(fetched.text, "final");
        assert!(fetched.done);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_without_id_creates() {
        let store = MemoryStore::new();

        let saved = store
            .upsert(Todo {
                id: None,
                text: "new through update".to_string(),
                done: false,
            })
            .await
            .unwrap();
        assert!(saved.id.is_some());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_todo() {
        let store = MemoryStore::new();
        let first = store.insert(Todo::new(None, "first", false)).await.unwrap();
        store.insert(Todo::new(None, "second", false)).await.unwrap();

        store.delete(first.id.as_deref().unwrap()).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "second");

        let err = store.delete(first.id.as_deref().unwrap()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryStore::new();
        for text in ["a", "b", "c"] {
            store.insert(Todo::new(None, text, false)).await.unwrap();
        }
        let ids: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id.unwrap())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
