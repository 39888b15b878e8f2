use api::models::Role;
use dioxus::prelude::*;
use ui::{DashboardProvider, Navbar, Protected};

use crate::Route;

/// Layout for every signed-in page: guard, dashboard state, navbar.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        Protected {
            DashboardProvider {
                Navbar {}
                main {
                    class: "page",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Nested layout for the supervisor-only pages.
#[component]
pub fn SupervisorOnly() -> Element {
    rsx! {
        Protected {
            allowed: vec![Role::Supervisor],
            Outlet::<Route> {}
        }
    }
}
