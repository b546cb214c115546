//! PostgreSQL-backed implementation of [`store::TodoStore`].
//!
//! Loads rows from the `todos` table (see `migrations/`) through the shared
//! connection pool. Ids are `UUID v4`, generated by the database on insert;
//! the client-facing [`Todo`] carries them as strings.

use sqlx::PgPool;
use store::{StoreError, Todo, TodoStore};
use uuid::Uuid;

/// The columns of the `todos` table the client model carries.
#[derive(Debug, Clone, sqlx::FromRow)]
struct TodoRow {
    id: Uuid,
    text: String,
    done: bool,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: Some(self.id.to_string()),
            text: self.text,
            done: self.done,
        }
    }
}

/// TodoStore backed by the shared PostgreSQL pool.
#[derive(Clone, Copy, Debug)]
pub struct PgStore {
    pool: &'static PgPool,
}

impl PgStore {
    pub fn new(pool: &'static PgPool) -> Self {
        Self { pool }
    }
}

fn backend_err(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl TodoStore for PgStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> = sqlx::query_as("SELECT id, text, done FROM todos ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(backend_err)?;
        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        let uuid = Uuid::parse_str(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        let row: Option<TodoRow> = sqlx::query_as("SELECT id, text, done FROM todos WHERE id = $1")
            .bind(uuid)
            .fetch_optional(self.pool)
            .await
            .map_err(backend_err)?;
        row.map(TodoRow::into_todo)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, todo: Todo) -> Result<Todo, StoreError> {
        if todo.id.is_some() {
            return Err(StoreError::IdAlreadyExists);
        }
        let row: TodoRow =
            sqlx::query_as("INSERT INTO todos (text, done) VALUES ($1, $2) RETURNING id, text, done")
                .bind(&todo.text)
                .bind(todo.done)
                .fetch_one(self.pool)
                .await
                .map_err(backend_err)?;
        Ok(row.into_todo())
    }

    async fn upsert(&self, todo: Todo) -> Result<Todo, StoreError> {
        // An id-less or unknown todo is created instead of updated.
        let id = todo.id.as_deref().and_then(|id| Uuid::parse_str(id).ok());
        let row: TodoRow = match id {
            Some(id) => sqlx::query_as(
                "INSERT INTO todos (id, text, done) VALUES ($1, $2, $3)
                 ON CONFLICT (id) DO UPDATE SET text = $2, done = $3, updated_at = NOW()
                 RETURNING id, text, done",
            )
            .bind(id)
            .bind(&todo.text)
            .bind(todo.done)
            .fetch_one(self.pool)
            .await
            .map_err(backend_err)?,
            None => sqlx::query_as("INSERT INTO todos (text, done) VALUES ($1, $2) RETURNING id, text, done")
                .bind(&todo.text)
                .bind(todo.done)
                .fetch_one(self.pool)
                .await
                .map_err(backend_err)?,
        };
        Ok(row.into_todo())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let uuid = Uuid::parse_str(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(uuid)
            .execute(self.pool)
            .await
            .map_err(backend_err)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
