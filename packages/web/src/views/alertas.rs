use api::models::{Alerta, Page};
use dioxus::prelude::*;
use ui::components::{
    paginate, Button, ButtonVariant, ErrorBanner, LoadingRow, Pagination, PAGE_SIZE,
};
use ui::{use_api, use_dashboard, use_latest_fetch, Loadable};

use super::short_date;

#[component]
pub fn Alertas() -> Element {
    let api = use_api();
    let dashboard = use_dashboard();
    let mut page = use_signal(|| 1usize);
    let mut only_pending = use_signal(|| true);
    let mut alertas = use_latest_fetch::<Page<Alerta>>();
    let mut resolving = use_signal(|| None::<i64>);
    let mut action_error = use_signal(|| None::<String>);

    let list_api = api.clone();
    let load = use_callback(move |()| {
        let api = list_api.clone();
        alertas.run(async move { api.get_alertas().await });
    });
    use_effect(move || load.call(()));

    let resolve = move |id: i64| {
        let api = api.clone();
        spawn(async move {
            resolving.set(Some(id));
            match api.resolve_alerta(id).await {
                Ok(_) => {
                    load.call(());
                    dashboard.refresh();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
            resolving.set(None);
        });
    };

    let state = alertas.state();
    let table = match &*state.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(list) => {
            let visible: Vec<Alerta> = list
                .items
                .iter()
                .rev()
                .filter(|a| !only_pending() || a.is_pending())
                .cloned()
                .collect();
            let total = visible.len();
            let rows = paginate(&visible, page(), PAGE_SIZE).to_vec();
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Fecha" }
                            th { "Tipo" }
                            th { "Mensaje" }
                            th { "Estado" }
                            th {}
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "5", class: "muted", "No hay alertas." } }
                        }
                        for a in rows {
                            tr {
                                key: "{a.id_alerta}",
                                td { {short_date(&a.fecha).to_string()} }
                                td { {a.tipo.clone().unwrap_or_default()} }
                                td { "{a.mensaje}" }
                                td { if a.resuelta { "Resuelta" } else { "Pendiente" } }
                                td {
                                    class: "row-actions",
                                    if a.is_pending() {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            disabled: resolving() == Some(a.id_alerta),
                                            onclick: {
                                                let resolve = resolve.clone();
                                                let id = a.id_alerta;
                                                move |_| resolve(id)
                                            },
                                            "Marcar resuelta"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination {
                    page: page(),
                    total,
                    on_change: move |p| page.set(p),
                }
            }
        }
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Alertas" }
            label {
                class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: only_pending(),
                    onchange: move |evt: FormEvent| {
                        only_pending.set(evt.checked());
                        page.set(1);
                    },
                }
                "Solo pendientes"
            }
        }
        if let Some(message) = action_error() {
            ErrorBanner { message, on_dismiss: move |_| action_error.set(None) }
        }
        {table}
    }
}
