use api::models::{Page, Producto, ProductoInput};
use dioxus::prelude::*;
use ui::components::{
    paginate, Button, ButtonVariant, ConfirmDialog, ErrorBanner, Field, Input, LoadingRow,
    Pagination, SearchInput, Select, Textarea, PAGE_SIZE,
};
use ui::views::ModalOverlay;
use ui::{use_api, use_dashboard, use_latest_fetch, Loadable};

use super::{id_text, number, optional_id, optional_text, resolved, select_options};

#[component]
pub fn Productos() -> Element {
    let api = use_api();
    let dashboard = use_dashboard();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut productos = use_latest_fetch::<Page<Producto>>();
    // `Some(None)` creates, `Some(Some(p))` edits `p`.
    let mut editor = use_signal(|| None::<Option<Producto>>);
    let mut deleting = use_signal(|| None::<Producto>);
    let mut action_error = use_signal(|| None::<String>);

    let list_api = api.clone();
    let load = use_callback(move |term: String| {
        let api = list_api.clone();
        productos.run(async move { api.get_productos(Some(&term)).await });
    });

    use_effect(move || load.call(search()));

    let reload = move || {
        load.call(search.peek().clone());
        dashboard.refresh();
    };

    let confirm_delete = move |_: ()| {
        let Some(producto) = deleting() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_producto(producto.id_producto).await {
                Ok(()) => {
                    tracing::info!("deleted producto {}", producto.id_producto);
                    reload();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
            deleting.set(None);
        });
    };

    let state = productos.state();
    let table = match &*state.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(list) => {
            let rows = paginate(&list.items, page(), PAGE_SIZE).to_vec();
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Código" }
                            th { "Nombre" }
                            th { "Precio" }
                            th { "Stock" }
                            th { "Mínimo" }
                            th {}
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "6", class: "muted", "No hay productos." } }
                        }
                        for p in rows {
                            tr {
                                key: "{p.id_producto}",
                                class: if p.is_low_stock() { "row-warn" } else { "" },
                                td { {p.codigo.clone().unwrap_or_default()} }
                                td { "{p.nombre}" }
                                td { {format!("{:.2}", p.precio)} }
                                td { "{p.stock_actual}" }
                                td { "{p.stock_minimo}" }
                                td {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let p = p.clone();
                                            move |_| editor.set(Some(Some(p.clone())))
                                        },
                                        "Editar"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let p = p.clone();
                                            move |_| deleting.set(Some(p.clone()))
                                        },
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination {
                    page: page(),
                    total: list.total,
                    on_change: move |p| page.set(p),
                }
            }
        }
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Productos" }
            Button {
                onclick: move |_| editor.set(Some(None)),
                "Nuevo producto"
            }
        }
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
                placeholder: "Buscar por nombre o código…",
                on_search: move |term| {
                    search.set(term);
                    page.set(1);
                },
            }
        }
        if let Some(message) = action_error() {
            ErrorBanner { message, on_dismiss: move |_| action_error.set(None) }
        }
        {table}

        if let Some(current) = editor() {
            ProductoForm {
                producto: current,
                on_saved: move |_| {
                    editor.set(None);
                    reload();
                },
                on_cancel: move |_| editor.set(None),
            }
        }
        if let Some(producto) = deleting() {
            ConfirmDialog {
                title: "Eliminar producto",
                message: format!("¿Eliminar \"{}\"? Esta acción no se puede deshacer.", producto.nombre),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn ProductoForm(
    producto: Option<Producto>,
    on_saved: EventHandler<Producto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let initial = producto
        .as_ref()
        .map(ProductoInput::from_producto)
        .unwrap_or_default();
    let editing_id = producto.as_ref().map(|p| p.id_producto);
    let title = if editing_id.is_some() { "Editar producto" } else { "Nuevo producto" };

    let mut nombre = use_signal(|| initial.nombre.clone());
    let mut codigo = use_signal(|| initial.codigo.clone().unwrap_or_default());
    let mut descripcion = use_signal(|| initial.descripcion.clone().unwrap_or_default());
    let mut precio = use_signal(|| initial.precio.to_string());
    let mut stock_minimo = use_signal(|| initial.stock_minimo.to_string());
    let mut categoria = use_signal(|| id_text(initial.id_categoria));
    let mut marca = use_signal(|| id_text(initial.id_marca));
    let mut proveedor = use_signal(|| id_text(initial.id_proveedor));
    let mut ubicacion = use_signal(|| id_text(initial.id_ubicacion));
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let catalog_api = api.clone();
    let catalogs = use_resource(move || {
        let api = catalog_api.clone();
        async move {
            let (categorias, marcas, proveedores, ubicaciones) = futures::try_join!(
                api.get_categorias(),
                api.get_marcas(),
                api.get_proveedores(None),
                api.get_ubicaciones(),
            )?;
            Ok::<_, api::ApiError>((
                select_options(&categorias.items, |c| c.id_categoria, |c| c.nombre.clone()),
                select_options(&marcas.items, |m| m.id_marca, |m| m.nombre.clone()),
                select_options(&proveedores.items, |p| p.id_proveedor, |p| p.nombre.clone()),
                select_options(&ubicaciones.items, |u| u.id_ubicacion, |u| u.nombre.clone()),
            ))
        }
    });
    let ((categorias, marcas, proveedores, ubicaciones), catalog_error) =
        resolved(&catalogs.read());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = ProductoInput {
            nombre: nombre().trim().to_string(),
            descripcion: optional_text(&descripcion()),
            codigo: optional_text(&codigo()),
            precio: number(&precio()),
            stock_minimo: number(&stock_minimo()),
            id_categoria: optional_id(&categoria()),
            id_marca: optional_id(&marca()),
            id_proveedor: optional_id(&proveedor()),
            id_ubicacion: optional_id(&ubicacion()),
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match editing_id {
                Some(id) => api.update_producto(id, &input).await,
                None => api.create_producto(&input).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: title.to_string(),
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
                    label: "Nombre",
                    html_for: "producto-nombre",
                    Input { id: "producto-nombre", required: true, value: nombre(), oninput: move |v| nombre.set(v) }
                }
                Field {
                    label: "Código",
                    html_for: "producto-codigo",
                    Input { id: "producto-codigo", value: codigo(), oninput: move |v| codigo.set(v) }
                }
                Field {
                    label: "Descripción",
                    html_for: "producto-descripcion",
                    Textarea { id: "producto-descripcion", value: descripcion(), oninput: move |v| descripcion.set(v) }
                }
                div {
                    class: "field-row",
                    Field {
                        label: "Precio",
                        html_for: "producto-precio",
                        Input {
                            id: "producto-precio",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: precio(),
                            oninput: move |v| precio.set(v),
                        }
                    }
                    Field {
                        label: "Stock mínimo",
                        html_for: "producto-minimo",
                        Input {
                            id: "producto-minimo",
                            r#type: "number",
                            min: "0",
                            value: stock_minimo(),
                            oninput: move |v| stock_minimo.set(v),
                        }
                    }
                }
                Field {
                    label: "Categoría",
                    html_for: "producto-categoria",
                    Select { id: "producto-categoria", value: categoria(), options: categorias, onchange: move |v| categoria.set(v) }
                }
                Field {
                    label: "Marca",
                    html_for: "producto-marca",
                    Select { id: "producto-marca", value: marca(), options: marcas, onchange: move |v| marca.set(v) }
                }
                Field {
                    label: "Proveedor",
                    html_for: "producto-proveedor",
                    Select { id: "producto-proveedor", value: proveedor(), options: proveedores, onchange: move |v| proveedor.set(v) }
                }
                Field {
                    label: "Ubicación",
                    html_for: "producto-ubicacion",
                    Select { id: "producto-ubicacion", value: ubicacion(), options: ubicaciones, onchange: move |v| ubicacion.set(v) }
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
                        if saving() { "Guardando…" } else { "Guardar" }
                    }
                }
            }
        }
    }
}
