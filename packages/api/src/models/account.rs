//! # Account model for authenticated users
//!
//! Two representations of a TaskHub account:
//!
//! [`Account`] (server only) is the complete database row from the
//! `accounts` table. It derives [`sqlx::FromRow`] so it can be loaded
//! directly from queries:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email` — unique login identifier.
//! - `name` — optional display name.
//! - `password_hash` — Argon2 hash in PHC format.
//! - `authorities` — permission tokens (`ROLE_USER`, `ROLE_ADMIN`, ...)
//!   stored as a `TEXT[]` column.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! [`AccountInfo`] is the client-safe subset that crosses the server/client
//! boundary via server functions. It omits the password hash and timestamps
//! and converts the `Uuid` to a `String` so it works in WASM. The route
//! guard consults [`AccountInfo::has_any_authority`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Authority granted to every registered account.
pub const ROLE_USER: &str = "ROLE_USER";

/// Full account record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub authorities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Account {
    /// Convert to AccountInfo for client consumption.
    pub fn to_info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            authorities: self.authorities.clone(),
        }
    }
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub authorities: Vec<String>,
}

impl AccountInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Whether the account holds at least one of the required authorities.
    /// An empty requirement means "any authenticated account".
    pub fn has_any_authority(&self, required: &[&str]) -> bool {
        required.is_empty()
            || required
                .iter()
                .any(|r| self.authorities.iter().any(|a| a == r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(authorities: &[&str]) -> AccountInfo {
        AccountInfo {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: None,
            authorities: authorities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn empty_requirement_means_authenticated_only() {
        assert!(account(&[]).has_any_authority(&[]));
        assert!(account(&[ROLE_USER]).has_any_authority(&[]));
    }

    #[test]
    fn one_held_authority_suffices() {
        let acc = account(&[ROLE_USER]);
        assert!(acc.has_any_authority(&[ROLE_USER, "ROLE_ADMIN"]));
        assert!(!acc.has_any_authority(&["ROLE_ADMIN"]));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut acc = account(&[]);
        assert_eq!(acc.display_name(), "user@example.com");
        acc.name = Some("Ada".to_string());
        assert_eq!(acc.display_name(), "Ada");
    }
}
