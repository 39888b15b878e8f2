use std::collections::HashMap;

use api::models::{Entrada, EntradaInput, Page};
use dioxus::prelude::*;
use ui::components::{
    matches_search, paginate, Button, ButtonVariant, ErrorBanner, Field, Input, LoadingRow,
    Pagination, SearchInput, Select, Textarea, PAGE_SIZE,
};
use ui::views::ModalOverlay;
use ui::{use_api, use_dashboard, use_latest_fetch, Loadable};

use super::{number, optional_id, optional_text, resolved, select_options, short_date};

#[component]
pub fn Entradas() -> Element {
    let api = use_api();
    let dashboard = use_dashboard();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut entradas = use_latest_fetch::<Page<Entrada>>();
    let mut creating = use_signal(|| false);

    let list_api = api.clone();
    let load = use_callback(move |()| {
        let api = list_api.clone();
        entradas.run(async move { api.get_entradas().await });
    });
    use_effect(move || load.call(()));

    let names_api = api.clone();
    let names = use_resource(move || {
        let api = names_api.clone();
        async move {
            api.get_productos(None).await.map(|page| {
                page.items
                    .into_iter()
                    .map(|p| (p.id_producto, p.nombre))
                    .collect::<HashMap<_, _>>()
            })
        }
    });
    let (names, names_error) = resolved(&names.read());

    let state = entradas.state();
    let table = match &*state.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(list) => {
            let term = search();
            // Newest first.
            let filtered: Vec<(Entrada, String)> = list
                .items
                .iter()
                .rev()
                .map(|e| (e.clone(), product_name(&names, e.id_producto)))
                .filter(|(e, name)| matches_search(&[name.as_str(), e.fecha.as_str()], &term))
                .collect();
            let total = filtered.len();
            let rows = paginate(&filtered, page(), PAGE_SIZE).to_vec();
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Fecha" }
                            th { "Producto" }
                            th { "Cantidad" }
                            th { "Precio unitario" }
                            th { "Observaciones" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "5", class: "muted", "No hay entradas registradas." } }
                        }
                        for (e, name) in rows {
                            tr {
                                key: "{e.id_entrada}",
                                td { {short_date(&e.fecha).to_string()} }
                                td { "{name}" }
                                td { "{e.cantidad}" }
                                td { {e.precio_unitario.map(|p| format!("{p:.2}")).unwrap_or_default()} }
                                td { {e.observaciones.clone().unwrap_or_default()} }
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
            h1 { "Entradas de stock" }
            Button {
                onclick: move |_| creating.set(true),
                "Registrar entrada"
            }
        }
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
                placeholder: "Buscar por producto o fecha…",
                on_search: move |term| {
                    search.set(term);
                    page.set(1);
                },
            }
        }
        if let Some(message) = names_error {
            ErrorBanner { message }
        }
        {table}

        if creating() {
            EntradaForm {
                on_saved: move |_| {
                    creating.set(false);
                    load.call(());
                    dashboard.refresh();
                },
                on_cancel: move |_| creating.set(false),
            }
        }
    }
}

pub(crate) fn product_name(names: &HashMap<i64, String>, id: i64) -> String {
    names.get(&id).cloned().unwrap_or_else(|| format!("#{id}"))
}

#[component]
fn EntradaForm(on_saved: EventHandler<Entrada>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let mut producto = use_signal(String::new);
    let mut proveedor = use_signal(String::new);
    let mut cantidad = use_signal(String::new);
    let mut precio = use_signal(String::new);
    let mut observaciones = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let catalog_api = api.clone();
    let catalogs = use_resource(move || {
        let api = catalog_api.clone();
        async move {
            let (productos, proveedores) =
                futures::try_join!(api.get_productos(None), api.get_proveedores(None))?;
            Ok::<_, api::ApiError>((
                select_options(&productos.items, |p| p.id_producto, |p| p.nombre.clone()),
                select_options(&proveedores.items, |p| p.id_proveedor, |p| p.nombre.clone()),
            ))
        }
    });
    let ((productos, proveedores), catalog_error) = resolved(&catalogs.read());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = EntradaInput {
            id_producto: optional_id(&producto()).unwrap_or_default(),
            cantidad: number(&cantidad()),
            id_proveedor: optional_id(&proveedor()),
            precio_unitario: optional_text(&precio()).and_then(|p| p.parse().ok()),
            observaciones: optional_text(&observaciones()),
            id_usuario: None,
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = api.create_entrada(&input).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    tracing::info!("registered entrada {}", saved.id_entrada);
                    on_saved.call(saved);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: "Registrar entrada",
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: handle_submit,
                if let Some(message) = catalog_error {
                    ErrorBanner { message }
                }
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                Field {
                    label: "Producto",
                    html_for: "entrada-producto",
                    Select { id: "entrada-producto", value: producto(), options: productos, onchange: move |v| producto.set(v) }
                }
                Field {
                    label: "Proveedor",
                    html_for: "entrada-proveedor",
                    Select { id: "entrada-proveedor", value: proveedor(), options: proveedores, onchange: move |v| proveedor.set(v) }
                }
                div {
                    class: "field-row",
                    Field {
                        label: "Cantidad",
                        html_for: "entrada-cantidad",
                        Input {
                            id: "entrada-cantidad",
                            r#type: "number",
                            min: "1",
                            required: true,
                            value: cantidad(),
                            oninput: move |v| cantidad.set(v),
                        }
                    }
                    Field {
                        label: "Precio unitario",
                        html_for: "entrada-precio",
                        Input {
                            id: "entrada-precio",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: precio(),
                            oninput: move |v| precio.set(v),
                        }
                    }
                }
                Field {
                    label: "Observaciones",
                    html_for: "entrada-observaciones",
                    Textarea { id: "entrada-observaciones", value: observaciones(), oninput: move |v| observaciones.set(v) }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Guardando…" } else { "Registrar" }
                    }
                }
            }
        }
    }
}
