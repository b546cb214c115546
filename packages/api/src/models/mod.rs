//! Data models for the application.

mod account;

#[cfg(feature = "server")]
pub use account::Account;
pub use account::{AccountInfo, ROLE_USER};
