use api::models::Role;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowDown, FaArrowUp, FaBell, FaBox, FaChartLine, FaFileExport, FaTruck, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::auth::{use_session, LogoutButton};
use crate::dashboard::use_dashboard;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// One entry of the main navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    /// `None` shows the entry to every signed-in user.
    pub roles: Option<&'static [Role]>,
}

pub const SUPERVISOR_ONLY: &[Role] = &[Role::Supervisor];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/dashboard", label: "Inicio", roles: None },
    NavItem { path: "/productos", label: "Productos", roles: None },
    NavItem { path: "/entradas", label: "Entradas", roles: None },
    NavItem { path: "/salidas", label: "Salidas", roles: None },
    NavItem { path: "/suppliers", label: "Proveedores", roles: None },
    NavItem { path: "/alertas", label: "Alertas", roles: None },
    NavItem { path: "/users", label: "Usuarios", roles: Some(SUPERVISOR_ONLY) },
    NavItem { path: "/reportes", label: "Reportes", roles: Some(SUPERVISOR_ONLY) },
];

/// Entries visible to `role`; links the guard would bounce are hidden.
pub fn nav_items_for(role: Option<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| match (item.roles, role) {
            (None, _) => true,
            (Some(roles), Some(role)) => roles.contains(&role),
            (Some(_), None) => false,
        })
        .copied()
        .collect()
}

fn icon_for(path: &str) -> Element {
    match path {
        "/dashboard" => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
        "/productos" => rsx! { Icon { icon: FaBox, width: 14, height: 14 } },
        "/entradas" => rsx! { Icon { icon: FaArrowDown, width: 14, height: 14 } },
        "/salidas" => rsx! { Icon { icon: FaArrowUp, width: 14, height: 14 } },
        "/suppliers" => rsx! { Icon { icon: FaTruck, width: 14, height: 14 } },
        "/alertas" => rsx! { Icon { icon: FaBell, width: 14, height: 14 } },
        "/users" => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaFileExport, width: 14, height: 14 } },
    }
}

/// Top navigation bar with the signed-in user and a logout button. Must be
/// rendered inside a [`DashboardProvider`](crate::DashboardProvider).
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let user = session.read().user.clone();
    let items = nav_items_for(user.as_ref().map(|u| u.role));
    let signed_in = user.map(|u| (u.display_name(), u.role.label()));
    let pending_alerts = use_dashboard()
        .summary()
        .read()
        .value()
        .map_or(0, |s| s.alertas_pendientes.len());

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "Inventario" }
            nav {
                class: "navbar-links",
                for item in items {
                    Link {
                        key: "{item.path}",
                        to: item.path,
                        active_class: "active".to_string(),
                        {icon_for(item.path)}
                        span { "{item.label}" }
                        if item.path == "/alertas" && pending_alerts > 0 {
                            span { class: "nav-badge", "{pending_alerts}" }
                        }
                    }
                }
            }
            if let Some((name, role)) = signed_in {
                div {
                    class: "navbar-user",
                    span { class: "navbar-user-name", "{name}" }
                    span { class: "navbar-user-role", "{role}" }
                    LogoutButton { class: "btn btn-ghost" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(role: Option<Role>) -> Vec<&'static str> {
        nav_items_for(role).iter().map(|i| i.path).collect()
    }

    #[test]
    fn test_supervisor_sees_everything() {
        assert_eq!(paths(Some(Role::Supervisor)).len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_assistant_hides_supervisor_pages() {
        let visible = paths(Some(Role::Asistente));
        assert!(visible.contains(&"/productos"));
        assert!(!visible.contains(&"/users"));
        assert!(!visible.contains(&"/reportes"));
    }
}
