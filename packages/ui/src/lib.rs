//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod fetch;
pub mod views;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    dispatch, sign_in, sign_out, use_api, use_session, LogoutButton, SessionExpiry, SessionProvider,
};

mod guard;
pub use guard::{GuardState, Protected, LOGIN_PATH, UNAUTHORIZED_PATH};

mod dashboard;
pub use dashboard::{use_dashboard, Dashboard, DashboardProvider};

mod navbar;
pub use navbar::{nav_items_for, NavItem, Navbar, NAV_ITEMS, SUPERVISOR_ONLY};

mod download;
pub use download::save_file;

pub use fetch::{use_latest_fetch, LatestFetch, Loadable};
