//! Dashboard state shared by the dashboard page and anything that changes
//! stock (entries, exits, resolved alerts) and wants the figures refreshed.

use api::DashboardSummary;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::fetch::{use_latest_fetch, LatestFetch, Loadable};

/// Context handle for the dashboard summary.
#[derive(Clone, Copy)]
pub struct Dashboard {
    fetch: LatestFetch<DashboardSummary>,
    refresh: Callback<()>,
}

impl Dashboard {
    pub fn summary(&self) -> Signal<Loadable<DashboardSummary>> {
        self.fetch.state()
    }

    /// Re-fetch all dashboard figures.
    pub fn refresh(&self) {
        self.refresh.call(());
    }
}

pub fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>()
}

/// Provides [`Dashboard`] to its children and loads it once on mount.
#[component]
pub fn DashboardProvider(children: Element) -> Element {
    let api = use_api();
    let mut fetch = use_latest_fetch::<DashboardSummary>();

    let refresh = use_callback(move |()| {
        let api = api.clone();
        fetch.run(async move { api.get_dashboard_summary().await });
    });

    use_context_provider(|| Dashboard { fetch, refresh });

    use_effect(move || refresh.call(()));

    rsx! {
        {children}
    }
}
