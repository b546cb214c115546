//! # Domain model for todo items
//!
//! Defines the [`Todo`] record exchanged between the views, the server
//! functions, and the storage layer. The type is `Serialize + Deserialize`
//! so it can cross the server/client boundary via Dioxus server functions.
//!
//! A todo has three fields:
//!
//! - `id` — assigned by the backend when the item is first persisted;
//!   `None` for an item that is still being staged in a form.
//! - `text` — free-form content. The model itself accepts any string;
//!   [`validate_text`] is the check the backend layer applies before
//!   persisting.
//! - `done` — completion flag.

use serde::{Deserialize, Serialize};

use crate::repo::StoreError;

/// Maximum accepted length of a todo's text, in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// A single todo item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Backend-assigned identifier, `None` until first persisted.
    pub id: Option<String>,
    /// Free-form task content.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

impl Todo {
    /// Create a todo for staging form input.
    ///
    /// New todos always start incomplete: the `done` value a caller passes
    /// is discarded here. Items coming back from the backend keep their
    /// flag — the override applies to this constructor only, not to
    /// deserialization or struct literals.
    pub fn new(id: Option<String>, text: impl Into<String>, done: bool) -> Self {
        let mut todo = Self {
            id,
            text: text.into(),
            done,
        };
        todo.done = false;
        todo
    }
}

/// Check the text constraint the backend enforces before persisting.
pub fn validate_text(text: &str) -> Result<(), StoreError> {
    if text.trim().is_empty() {
        return Err(StoreError::InvalidText("text must not be empty"));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(StoreError::InvalidText("text exceeds 255 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_never_pre_completed() {
        let todo = Todo::new(Some("42".to_string()), "ship it", true);
        assert_eq!(todo.id.as_deref(), Some("42"));
        assert_eq!(todo.text, "ship it");
        assert!(!todo.done);
    }

    #[test]
    fn deserialization_keeps_the_done_flag() {
        let todo: Todo = serde_json::from_str(r#"{"id":"1","text":"a","done":true}"#).unwrap();
        assert!(todo.done);
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let todo = Todo {
            id: Some("7".to_string()),
            text: "water plants".to_string(),
            done: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":"7","text":"water plants","done":true}"#);
    }

    #[test]
    fn validate_text_rejects_empty_and_oversized() {
        assert!(validate_text("buy milk").is_ok());
        assert!(validate_text("").is_err());
        assert!(validate_text("   ").is_err());
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_text(&long).is_err());
        let max = "x".repeat(MAX_TEXT_LEN);
        assert!(validate_text(&max).is_ok());
    }
}
