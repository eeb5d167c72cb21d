//! Authentication context shared by the navbar and the pages.
//!
//! The session itself lives on the server (`api` crate); the client keeps the bearer
//! token and the user it belongs to in a context signal.

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use thiserror::Error;

use crate::config::NavConfig;

/// Uploaded pictures whose name contains this are placeholders, not user content.
const DEFAULT_PICTURE_MARKER: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub profile_picture: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            profile_picture: None,
        }
    }

    pub fn with_profile_picture(mut self, file_name: impl Into<String>) -> Self {
        self.profile_picture = Some(file_name.into());
        self
    }

    /// Image shown in the avatar button. Falls back to the site logo.
    pub fn avatar_src(&self, config: &NavConfig) -> String {
        match self.profile_picture.as_deref() {
            Some(file) if !file.is_empty() && !file.contains(DEFAULT_PICTURE_MARKER) => {
                config.profile_picture_url(file)
            }
            _ => config.logo_src.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl From<api::SessionGrant> for Session {
    fn from(grant: api::SessionGrant) -> Self {
        Self {
            user: User {
                username: grant.username,
                profile_picture: grant.profile_picture,
            },
            token: grant.token,
        }
    }
}

/// Who the navbar is rendering for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIdentity {
    Anonymous,
    Authenticated(User),
}

impl NavIdentity {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => NavIdentity::Authenticated(session.user.clone()),
            None => NavIdentity::Anonymous,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("could not start a session: {0}")]
    StartSession(ServerFnError),
    #[error("could not end the session: {0}")]
    EndSession(ServerFnError),
}

#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    session: Signal<Option<Session>>,
}

impl AuthContext {
    pub fn identity(&self) -> NavIdentity {
        NavIdentity::from_session(self.session.read().as_ref())
    }

    pub async fn sign_in(&self, username: String) -> Result<(), AuthError> {
        let grant = api::start_session(username)
            .await
            .map_err(AuthError::StartSession)?;
        info!(user = %grant.username, "signed in");

        let mut session = self.session;
        session.set(Some(grant.into()));
        Ok(())
    }

    /// End the current session.
    ///
    /// The local session is dropped before the server is asked, so a failed call still
    /// leaves the client signed out.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let mut session = self.session;
        let Some(current) = session.write().take() else {
            return Ok(());
        };
        info!(user = %current.user.username, "signing out");

        api::end_session(current.token)
            .await
            .map_err(AuthError::EndSession)
    }
}

/// Places an [`AuthContext`] in scope for everything below it, starting signed out
/// unless a restored `session` is given.
#[component]
pub fn AuthProvider(session: Option<Session>, children: Element) -> Element {
    use_context_provider(|| AuthContext {
        session: Signal::new(session),
    });

    rsx! { {children} }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
