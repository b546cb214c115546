//! Session data types.

/// Key for storing the account ID in the session.
pub const SESSION_ACCOUNT_ID_KEY: &str = "account_id";
