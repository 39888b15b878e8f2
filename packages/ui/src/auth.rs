//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one `Signal<Session>` of the app and the shared
//! [`ApiClient`]. Components read the session with [`use_session`]; changes go
//! through [`dispatch`], which folds a [`SessionAction`] into the current
//! state, so every transition is one of the named actions.

use api::session::{self, Session, SessionAction};
use api::ApiClient;
use dioxus::prelude::*;
use store::SessionStorage;

/// The current session. Re-renders readers on every transition.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Apply `action` to the session signal.
pub fn dispatch(mut session: Signal<Session>, action: SessionAction) {
    let next = session.peek().clone().apply(action);
    session.set(next);
}

/// Authenticate and update the session. Resolves once the token is persisted
/// and the session is authenticated, so callers may navigate right after
/// awaiting it. On failure the message is already recorded in the session
/// as `LoginFailed` and the error is handed back to the caller.
pub async fn sign_in(
    api: ApiClient,
    session: Signal<Session>,
    email: String,
    password: String,
) -> api::Result<()> {
    dispatch(session, SessionAction::LoginStarted);
    match session::login(&api, &email, &password).await {
        Ok(action) => {
            dispatch(session, action);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("login failed: {e}");
            dispatch(session, SessionAction::LoginFailed(e.to_string()));
            Err(e)
        }
    }
}

pub fn sign_out(api: &ApiClient, session: Signal<Session>) {
    dispatch(session, session::logout(api));
}

/// Ends the session when the backend rejects the stored credentials in the
/// middle of a session (expired or revoked token). Provided by
/// [`SessionProvider`]; [`LatestFetch`](crate::LatestFetch) calls it on auth errors.
#[derive(Clone, Copy)]
pub struct SessionExpiry(pub(crate) Callback<()>);

impl SessionExpiry {
    pub fn expire(&self) {
        self.0.call(());
    }
}

/// Provider component that restores the persisted session on mount.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_context_provider(|| {
        ApiClient::from_env(SessionStorage::new(store::platform_store()))
    });
    let session = use_context_provider(|| Signal::new(Session::default()));

    let expiry_api = api.clone();
    let expire = use_callback(move |()| {
        if session.peek().is_authenticated {
            tracing::info!("credentials rejected mid-session, signing out");
            sign_out(&expiry_api, session);
        }
    });
    use_context_provider(|| SessionExpiry(expire));

    let _restore = use_resource(move || {
        let api = api.clone();
        async move {
            dispatch(session, SessionAction::Restoring);
            let action = session::restore_session(&api).await;
            dispatch(session, action);
        }
    });

    rsx! {
        {children}
    }
}

/// Button that ends the session. The guard then sends the user to `/login`.
#[component]
pub fn LogoutButton(
    #[props(default = "Cerrar sesión".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let api = use_api();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| sign_out(&api, session),
            "{label}"
        }
    }
}
