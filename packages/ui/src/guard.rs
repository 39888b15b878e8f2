//! Route guard.
//!
//! [`GuardState::evaluate`] is the whole decision; [`Protected`] only maps it
//! to a render or a history-replacing redirect.

use api::models::Role;
use api::Session;
use dioxus::prelude::*;

use crate::auth::use_session;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session restore still running; render nothing but a placeholder.
    Loading,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

impl GuardState {
    /// `allowed: None` admits every authenticated role.
    pub fn evaluate(session: &Session, allowed: Option<&[Role]>) -> Self {
        if session.is_loading {
            return GuardState::Loading;
        }
        if !session.is_authenticated {
            return GuardState::Unauthenticated;
        }
        match (allowed, session.role()) {
            (None, _) => GuardState::Authorized,
            (Some(roles), Some(role)) if roles.contains(&role) => GuardState::Authorized,
            (Some(_), _) => GuardState::Unauthorized,
        }
    }

    pub fn redirect(self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(LOGIN_PATH),
            GuardState::Unauthorized => Some(UNAUTHORIZED_PATH),
            GuardState::Loading | GuardState::Authorized => None,
        }
    }
}

/// Renders `children` only for an authenticated session whose role is in
/// `allowed`. Redirects replace the history entry, so Back does not return to
/// the guarded page.
#[component]
pub fn Protected(#[props(default)] allowed: Option<Vec<Role>>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = GuardState::evaluate(&session.read(), allowed.as_deref());

    use_effect(use_reactive!(|state| {
        if let Some(path) = state.redirect() {
            tracing::debug!("guard redirect to {path}");
            nav.replace(path);
        }
    }));

    match state {
        GuardState::Authorized => rsx! {
            {children}
        },
        GuardState::Loading => rsx! {
            div { class: "guard-loading", "Cargando…" }
        },
        GuardState::Unauthenticated | GuardState::Unauthorized => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::User;
    use api::SessionAction;

    fn session_for(role: Role) -> Session {
        Session::signed_out().apply(SessionAction::Authenticated {
            user: User {
                email: "user@example.com".into(),
                role,
                nombre: "Ana".into(),
                apellido: "Pérez".into(),
            },
            token: "tok".into(),
        })
    }

    #[test]
    fn test_loading_wins() {
        let s = Session::default();
        assert_eq!(GuardState::evaluate(&s, None), GuardState::Loading);
        assert_eq!(GuardState::evaluate(&s, Some(&[Role::Supervisor])), GuardState::Loading);
        assert_eq!(GuardState::Loading.redirect(), None);
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        let s = Session::signed_out();
        let state = GuardState::evaluate(&s, None);
        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(state.redirect(), Some("/login"));
    }

    #[test]
    fn test_role_outside_allow_list_is_unauthorized() {
        let s = session_for(Role::Asistente);
        let state = GuardState::evaluate(&s, Some(&[Role::Supervisor]));
        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(state.redirect(), Some("/unauthorized"));
    }

    #[test]
    fn test_allowed_roles_render() {
        for role in [Role::Supervisor, Role::Asistente] {
            let s = session_for(role);
            assert_eq!(GuardState::evaluate(&s, None), GuardState::Authorized);
            assert_eq!(
                GuardState::evaluate(&s, Some(&[Role::Supervisor, Role::Asistente])),
                GuardState::Authorized
            );
        }
        let s = session_for(Role::Supervisor);
        assert_eq!(GuardState::evaluate(&s, Some(&[Role::Supervisor])), GuardState::Authorized);
    }

    #[test]
    fn test_empty_allow_list_admits_nobody() {
        let s = session_for(Role::Supervisor);
        assert_eq!(GuardState::evaluate(&s, Some(&[])), GuardState::Unauthorized);
    }
}
