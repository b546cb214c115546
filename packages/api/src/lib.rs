//! # API crate — shared fullstack server functions for TaskHub
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session key and Argon2 password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database model (`Account`) and its client-safe projection (`AccountInfo`) |
//! | [`pg`] | `server` | PostgreSQL implementation of [`store::TodoStore`] |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_account`, `register`, `login`, `logout`
//! - **Todos**: `list_todos`, `get_todo`, `create_todo`, `update_todo`,
//!   `delete_todo` — all require an authenticated session.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod pg;

pub use models::{AccountInfo, ROLE_USER};
pub use store::{Todo, MAX_TEXT_LEN};

#[cfg(feature = "server")]
use store::TodoStore;

/// Resolve the account id stored in the session, or fail as unauthenticated.
#[cfg(feature = "server")]
async fn require_account_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let account_id: Option<String> = session
        .get(auth::SESSION_ACCOUNT_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account_id) = account_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&account_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// The todo store every todo server function runs against.
#[cfg(feature = "server")]
async fn todo_store() -> Result<pg::PgStore, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(pg::PgStore::new(pool))
}

/// Get the current authenticated account from the session.
#[cfg(feature = "server")]
#[get("/api/account", session: tower_sessions::Session)]
pub async fn get_current_account() -> Result<Option<AccountInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Account;

    let account_id: Option<String> = session
        .get(auth::SESSION_ACCOUNT_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account_id) = account_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account_uuid = uuid::Uuid::parse_str(&account_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<Account> = sqlx::query_as("SELECT * FROM accounts WHERE id = $1")
        .bind(account_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.map(|a| a.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/account")]
pub async fn get_current_account() -> Result<Option<AccountInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account with email and password.
#[cfg(feature = "server")]
#[post("/api/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<AccountInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1::bigint AS n FROM accounts WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(ServerFnError::new)?;

    let name = if name.is_empty() { None } else { Some(name) };
    let account: models::Account = sqlx::query_as(
        "INSERT INTO accounts (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_ACCOUNT_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<AccountInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/authentication", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<AccountInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<models::Account> =
        sqlx::query_as("SELECT * FROM accounts WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account) = account else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &account.password_hash)
        .map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_ACCOUNT_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/authentication")]
pub async fn login(email: String, password: String) -> Result<AccountInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current account by clearing the session.
#[cfg(feature = "server")]
#[post("/api/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List all todos, ordered by id.
#[cfg(feature = "server")]
#[get("/api/todos", session: tower_sessions::Session)]
pub async fn list_todos() -> Result<Vec<Todo>, ServerFnError> {
    require_account_id(&session).await?;
    let store = todo_store().await?;
    store
        .list()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/todos")]
pub async fn list_todos() -> Result<Vec<Todo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get a single todo by id.
#[cfg(feature = "server")]
#[get("/api/todos/:id", session: tower_sessions::Session)]
pub async fn get_todo(id: String) -> Result<Todo, ServerFnError> {
    require_account_id(&session).await?;
    let store = todo_store().await?;
    store
        .get(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/todos/:id")]
pub async fn get_todo(id: String) -> Result<Todo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a new todo. The backend assigns the id; a todo arriving with one
/// is rejected.
#[cfg(feature = "server")]
#[post("/api/todos", session: tower_sessions::Session)]
pub async fn create_todo(todo: Todo) -> Result<Todo, ServerFnError> {
    require_account_id(&session).await?;
    store::models::validate_text(&todo.text)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let store = todo_store().await?;
    store
        .insert(todo)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/todos")]
pub async fn create_todo(todo: Todo) -> Result<Todo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a todo. An id-less or unknown todo is created instead.
#[cfg(feature = "server")]
#[post("/api/todos/update", session: tower_sessions::Session)]
pub async fn update_todo(todo: Todo) -> Result<Todo, ServerFnError> {
    require_account_id(&session).await?;
    store::models::validate_text(&todo.text)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let store = todo_store().await?;
    store
        .upsert(todo)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/todos/update")]
pub async fn update_todo(todo: Todo) -> Result<Todo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a todo by id.
#[cfg(feature = "server")]
#[post("/api/todos/:id/delete", session: tower_sessions::Session)]
pub async fn delete_todo(id: String) -> Result<(), ServerFnError> {
    require_account_id(&session).await?;
    let store = todo_store().await?;
    store
        .delete(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/todos/:id/delete")]
pub async fn delete_todo(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
