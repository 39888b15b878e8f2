//! # Session state and the flows that change it
//!
//! [`Session`] is the single source of truth for "who is logged in". It is a
//! plain value: the UI keeps one in a signal, and the only way to change it is
//! [`Session::apply`] with a named [`SessionAction`], which returns the next
//! state. After every `apply`,
//! `is_authenticated == (user.is_some() && token.is_some())`.
//!
//! The async flows talk to the backend and storage and resolve to the action
//! to apply:
//!
//! | Flow | Success | Failure |
//! |------|---------|---------|
//! | [`restore_session`] | `Authenticated` | storage cleared, `SignedOut` (never an error) |
//! | [`login`] | token + user persisted, `Authenticated` | `Err`, caller applies `LoginFailed` |
//! | [`logout`] | storage cleared, `SignedOut` | storage error logged, still `SignedOut` |

use crate::models::{Role, User};
use crate::services::LoginResponse;
use crate::{ApiClient, ApiError, Result};

/// Authentication state of the running application.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Starts loading: a restore is kicked off as soon as the store exists.
impl Default for Session {
    fn default() -> Self {
        Self {
            is_loading: true,
            ..Self::signed_out()
        }
    }
}

/// Named transitions of [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Restoring,
    LoginStarted,
    Authenticated { user: User, token: String },
    LoginFailed(String),
    SignedOut,
}

impl Session {
    /// Settled, unauthenticated, no error.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn apply(self, action: SessionAction) -> Session {
        let next = match action {
            SessionAction::Restoring | SessionAction::LoginStarted => Session {
                is_loading: true,
                error: None,
                ..self
            },
            SessionAction::Authenticated { user, token } => Session {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            SessionAction::LoginFailed(message) => Session {
                error: Some(message),
                ..Session::signed_out()
            },
            SessionAction::SignedOut => Session::signed_out(),
        };
        debug_assert_eq!(
            next.is_authenticated,
            next.user.is_some() && next.token.is_some()
        );
        next
    }
}

/// Rebuild a session from the persisted token, if the backend still accepts it.
pub async fn restore_session(api: &ApiClient) -> SessionAction {
    let token = match api.storage().token() {
        Ok(Some(token)) => token,
        Ok(None) => return SessionAction::SignedOut,
        Err(e) => {
            tracing::warn!("cannot read stored session: {e}");
            discard_persisted(api);
            return SessionAction::SignedOut;
        }
    };

    match api.current_user().await {
        Ok(user) => {
            if let Err(e) = api.storage().set_user(&user) {
                tracing::warn!("cannot refresh stored user: {e}");
            }
            tracing::info!("session restored for {}", user.email);
            SessionAction::Authenticated { user, token }
        }
        Err(e) => {
            tracing::info!("stored session rejected: {e}");
            discard_persisted(api);
            SessionAction::SignedOut
        }
    }
}

/// Authenticate with email and password. The token is persisted before this
/// returns, so any redirect decided afterwards sees an authenticated session.
/// On any failure after the backend accepted the credentials, storage is
/// cleared again so a reload cannot restore a login reported as failed.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<SessionAction> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let response = api.login_request(email, password).await?;
    match persist_login(api, response).await {
        Ok(action) => Ok(action),
        Err(e) => {
            discard_persisted(api);
            Err(e)
        }
    }
}

async fn persist_login(api: &ApiClient, response: LoginResponse) -> Result<SessionAction> {
    let token = response.access_token;
    let user = match response.usuario {
        Some(usuario) => usuario.to_user(),
        None => {
            // `/auth/me` authenticates with the stored token.
            api.storage().set_token(&token)?;
            api.current_user().await?
        }
    };
    api.storage().save(&token, &user)?;

    tracing::info!("logged in as {} ({})", user.email, user.role);
    Ok(SessionAction::Authenticated { user, token })
}

/// End the session. Best effort: the result is always `SignedOut`.
pub fn logout(api: &ApiClient) -> SessionAction {
    if let Err(e) = api.storage().clear() {
        tracing::warn!("logout could not clear stored session: {e}");
    }
    SessionAction::SignedOut
}

fn discard_persisted(api: &ApiClient) {
    if let Err(e) = api.storage().clear() {
        tracing::warn!("cannot clear stored session: {e}");
    }
}
