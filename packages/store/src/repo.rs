//! # TodoStore — the storage seam for todo items
//!
//! [`TodoStore`] is the async interface every todo backend implements. The
//! server functions in the `api` crate run it against PostgreSQL; the test
//! suites use [`crate::MemoryStore`]. All five operations take `&self` so
//! implementations share state through interior mutability.
//!
//! | Method | Contract |
//! |--------|----------|
//! | [`list`](TodoStore::list) | Every stored todo, ordered by id. |
//! | [`get`](TodoStore::get) | The todo with the given id, or [`StoreError::NotFound`]. |
//! | [`insert`](TodoStore::insert) | Persist a new todo. The store assigns the id; a todo arriving with one is rejected with [`StoreError::IdAlreadyExists`]. |
//! | [`upsert`](TodoStore::upsert) | Replace the stored todo with the same id. An id-less or unknown todo is created instead. |
//! | [`delete`](TodoStore::delete) | Remove the todo, or [`StoreError::NotFound`]. |

use crate::models::Todo;

/// Errors produced by a [`TodoStore`] or by validation in front of one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No todo with this id exists.
    #[error("todo {0} not found")]
    NotFound(String),
    /// A new todo arrived already carrying an id.
    #[error("a new todo cannot already have an id")]
    IdAlreadyExists,
    /// The todo's text failed validation.
    #[error("invalid text: {0}")]
    InvalidText(&'static str),
    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Async interface for storing and retrieving todos.
pub trait TodoStore {
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Todo>, StoreError>>;
    fn get(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Todo, StoreError>>;
    fn insert(
        &self,
        todo: Todo,
    ) -> impl std::future::Future<Output = Result<Todo, StoreError>>;
    fn upsert(
        &self,
        todo: Todo,
    ) -> impl std::future::Future<Output = Result<Todo, StoreError>>;
    fn delete(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
