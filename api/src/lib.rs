//! Session endpoints for LostCloud, exposed as Dioxus server functions.
//!
//! The client side reaches these through `ui::auth`. On the server they operate on the
//! in-memory token registry in `sessions`; nothing is written to disk.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
mod sessions;

/// What the client receives after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGrant {
    pub token: String,
    pub username: String,
    pub profile_picture: Option<String>,
}

/// Open a session for `username` and hand back its bearer token.
#[server]
pub async fn start_session(username: String) -> Result<SessionGrant, ServerFnError> {
    let grant = sessions::issue(&username)?;
    dioxus::logger::tracing::info!(user = %grant.username, "session started");
    Ok(grant)
}

/// Invalidate the session identified by `token`.
///
/// Fails when the token was never issued or has already been revoked, which is how an
/// expired session surfaces to the client.
#[server]
pub async fn end_session(token: String) -> Result<(), ServerFnError> {
    let username = sessions::revoke(&token)?;
    dioxus::logger::tracing::info!(user = %username, "session ended");
    Ok(())
}
