//! Server-side registry of issued session tokens.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use thiserror::Error;
use uuid::Uuid;

use crate::SessionGrant;

static ISSUED: Lazy<Mutex<HashMap<String, String>>> = Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("session is not active")]
    NotActive,
    #[error("session registry is unavailable")]
    Unavailable,
}

pub fn issue(username: &str) -> Result<SessionGrant, SessionError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(SessionError::EmptyUsername);
    }

    let token = Uuid::new_v4().to_string();
    ISSUED
        .lock()
        .map_err(|_| SessionError::Unavailable)?
        .insert(token.clone(), username.to_string());

    Ok(SessionGrant {
        token,
        username: username.to_string(),
        profile_picture: None,
    })
}

/// Remove `token` from the registry, returning the username it belonged to.
pub fn revoke(token: &str) -> Result<String, SessionError> {
    ISSUED
        .lock()
        .map_err(|_| SessionError::Unavailable)?
        .remove(token)
        .ok_or(SessionError::NotActive)
}
