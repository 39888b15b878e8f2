use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div {
            class: "centered-page",
            h1 { "Acceso denegado" }
            p { "Tu rol no tiene permiso para ver esta página." }
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Volver al inicio" }
        }
    }
}

/// Any unknown path goes to the login page, which forwards signed-in users
/// to the dashboard.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Login {});
    });
    tracing::debug!("unknown route /{}", segments.join("/"));
    rsx! {}
}
