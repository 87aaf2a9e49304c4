//! Persistent session state.
//!
//! Login stores the bearer token and the numeric user id under fixed
//! keys, always as a pair. Reads that find only one half (or a user id
//! that does not parse) report no session at all; mixed state is never
//! trusted.

use crate::utils::storage;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "user_id";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// In-memory view of a complete stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

pub fn set_session(token: &str, user_id: i64) -> Result<(), SessionError> {
    storage::set_item(TOKEN_KEY, token).map_err(SessionError::Storage)?;
    storage::set_item(USER_ID_KEY, &user_id.to_string()).map_err(SessionError::Storage)
}

pub fn token() -> Option<String> {
    storage::get_item(TOKEN_KEY).ok().flatten()
}

pub fn user_id() -> Option<i64> {
    storage::get_item(USER_ID_KEY)
        .ok()
        .flatten()
        .and_then(|raw| raw.parse().ok())
}

/// Returns the session only when both halves are present and well formed.
pub fn session() -> Option<Session> {
    let token = token()?;
    let user_id = user_id()?;
    Some(Session { token, user_id })
}

/// Removes both halves. Used by logout and by 401 handling.
pub fn clear_session() {
    let _ = storage::remove_item(TOKEN_KEY);
    let _ = storage::remove_item(USER_ID_KEY);
}
