use std::collections::HashMap;

use api::models::{Page, Producto, Salida, SalidaInput};
use dioxus::prelude::*;
use ui::components::{
    matches_search, paginate, Button, ButtonVariant, ErrorBanner, Field, Input, LoadingRow,
    Pagination, SearchInput, Select, Textarea, PAGE_SIZE,
};
use ui::views::ModalOverlay;
use ui::{use_api, use_dashboard, use_latest_fetch, Loadable};

use super::entradas::product_name;
use super::{number, optional_id, optional_text, resolved, select_options, short_date};

#[component]
pub fn Salidas() -> Element {
    let api = use_api();
    let dashboard = use_dashboard();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut salidas = use_latest_fetch::<Page<Salida>>();
    let mut creating = use_signal(|| false);

    let list_api = api.clone();
    let load = use_callback(move |()| {
        let api = list_api.clone();
        salidas.run(async move { api.get_salidas().await });
    });
    use_effect(move || load.call(()));

    let catalog_api = api.clone();
    let mut catalogs = use_resource(move || {
        let api = catalog_api.clone();
        async move {
            let (productos, motivos) =
                futures::try_join!(api.get_productos(None), api.get_motivos())?;
            Ok::<_, api::ApiError>((productos.items, motivos.items))
        }
    });
    let ((productos, motivo_list), catalog_error) = resolved(&catalogs.read());
    let names: HashMap<i64, String> = productos
        .iter()
        .map(|p| (p.id_producto, p.nombre.clone()))
        .collect();
    let motivos: HashMap<i64, String> = motivo_list
        .iter()
        .map(|m| (m.id_motivo, m.nombre.clone()))
        .collect();
    let motivo_options = select_options(&motivo_list, |m| m.id_motivo, |m| m.nombre.clone());

    let state = salidas.state();
    let table = match &*state.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(list) => {
            let term = search();
            let filtered: Vec<(Salida, String, String)> = list
                .items
                .iter()
                .rev()
                .map(|s| {
                    let motivo = s
                        .id_motivo
                        .and_then(|id| motivos.get(&id).cloned())
                        .unwrap_or_default();
                    (s.clone(), product_name(&names, s.id_producto), motivo)
                })
                .filter(|(s, name, motivo)| {
                    matches_search(&[name.as_str(), motivo.as_str(), s.fecha.as_str()], &term)
                })
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
                            th { "Motivo" }
                            th { "Observaciones" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "5", class: "muted", "No hay salidas registradas." } }
                        }
                        for (s, name, motivo) in rows {
                            tr {
                                key: "{s.id_salida}",
                                td { {short_date(&s.fecha).to_string()} }
                                td { "{name}" }
                                td { "{s.cantidad}" }
                                td { "{motivo}" }
                                td { {s.observaciones.clone().unwrap_or_default()} }
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
            h1 { "Salidas de stock" }
            Button {
                onclick: move |_| creating.set(true),
                "Registrar salida"
            }
        }
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
                placeholder: "Buscar por producto, motivo o fecha…",
                on_search: move |term| {
                    search.set(term);
                    page.set(1);
                },
            }
        }
        if let Some(message) = catalog_error {
            ErrorBanner { message }
        }
        {table}

        if creating() {
            SalidaForm {
                productos: productos.clone(),
                motivos: motivo_options,
                on_saved: move |_| {
                    creating.set(false);
                    load.call(());
                    dashboard.refresh();
                    catalogs.restart();
                },
                on_cancel: move |_| creating.set(false),
            }
        }
    }
}

/// Exit form. The quantity is checked against the listed stock before
/// anything is sent, then against the product's current stock on submit.
#[component]
fn SalidaForm(
    productos: Vec<Producto>,
    motivos: Vec<(String, String)>,
    on_saved: EventHandler<Salida>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut producto = use_signal(String::new);
    let mut motivo = use_signal(String::new);
    let mut cantidad = use_signal(String::new);
    let mut observaciones = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let selected = optional_id(&producto())
        .and_then(|id| productos.iter().find(|p| p.id_producto == id).cloned());
    let stock = selected.as_ref().map(|p| p.stock_actual);
    let producto_options: Vec<(String, String)> = productos
        .iter()
        .map(|p| {
            (
                p.id_producto.to_string(),
                format!("{} (stock: {})", p.nombre, p.stock_actual),
            )
        })
        .collect();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = SalidaInput {
            id_producto: optional_id(&producto()).unwrap_or_default(),
            cantidad: number(&cantidad()),
            id_motivo: optional_id(&motivo()),
            observaciones: optional_text(&observaciones()),
            id_usuario: None,
        };
        let checked = match stock {
            Some(stock) => input.validate_against_stock(stock),
            None => input.validate(),
        };
        if let Err(e) = checked {
            error.set(Some(e.to_string()));
            return;
        }
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = api.create_salida_checked(&input).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    tracing::info!("registered salida {}", saved.id_salida);
                    on_saved.call(saved);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: "Registrar salida",
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: handle_submit,
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                Field {
                    label: "Producto",
                    html_for: "salida-producto",
                    Select { id: "salida-producto", value: producto(), options: producto_options, onchange: move |v| producto.set(v) }
                }
                Field {
                    label: "Motivo",
                    html_for: "salida-motivo",
                    Select { id: "salida-motivo", value: motivo(), options: motivos, onchange: move |v| motivo.set(v) }
                }
                Field {
                    label: "Cantidad",
                    html_for: "salida-cantidad",
                    Input {
                        id: "salida-cantidad",
                        r#type: "number",
                        min: "1",
                        required: true,
                        value: cantidad(),
                        oninput: move |v| cantidad.set(v),
                    }
                }
                if let Some(stock) = stock {
                    p { class: "muted", "Disponible: {stock}" }
                }
                Field {
                    label: "Observaciones",
                    html_for: "salida-observaciones",
                    Textarea { id: "salida-observaciones", value: observaciones(), oninput: move |v| observaciones.set(v) }
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
