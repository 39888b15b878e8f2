//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Field, Input};
use ui::{sign_in, use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Already signed in (restored session or finished login): leave the page.
    use_effect(move || {
        let state = session.read();
        if !state.is_loading && state.is_authenticated {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            match sign_in(api, session, email(), password()).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                // The banner shows the message from the session; keep the
                // email and let the user retype the password.
                Err(e) => {
                    tracing::debug!("login rejected: {e}");
                    password.set(String::new());
                }
            }
        });
    };

    let state = session.read();
    let busy = state.is_loading;
    let error = state.error.clone();
    drop(state);

    rsx! {
        div {
            class: "centered-page",

            h1 { class: "login-title", "Inventario" }
            p { class: "login-subtitle", "Inicia sesión para continuar" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error {
                    ErrorBanner { message: err }
                }

                Field {
                    label: "Correo electrónico",
                    html_for: "login-email",
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "usuario@empresa.com",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                }

                Field {
                    label: "Contraseña",
                    html_for: "login-password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Ingresando…" } else { "Ingresar" }
                }
            }
        }
    }
}
