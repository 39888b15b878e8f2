use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Alertas, AppShell, Dashboard, Entradas, Login, NotFound, Productos, Proveedores, Reportes,
    Salidas, SupervisorOnly, Unauthorized, Usuarios,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(AppShell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/productos")]
        Productos {},
        #[route("/entradas")]
        Entradas {},
        #[route("/salidas")]
        Salidas {},
        #[route("/suppliers")]
        Proveedores {},
        #[route("/alertas")]
        Alertas {},
        #[layout(SupervisorOnly)]
            #[route("/users")]
            Usuarios {},
            #[route("/reportes")]
            Reportes {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("api base url: {}", api::ApiConfig::global().base_url);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
