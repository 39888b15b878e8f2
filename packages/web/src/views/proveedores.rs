use api::models::{Page, Proveedor, ProveedorInput};
use dioxus::prelude::*;
use ui::components::{
    paginate, Button, ButtonVariant, ConfirmDialog, ErrorBanner, Field, Input, LoadingRow,
    Pagination, SearchInput, PAGE_SIZE,
};
use ui::views::ModalOverlay;
use ui::{use_api, use_latest_fetch, Loadable};

use super::optional_text;

#[component]
pub fn Proveedores() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut proveedores = use_latest_fetch::<Page<Proveedor>>();
    let mut editor = use_signal(|| None::<Option<Proveedor>>);
    let mut deleting = use_signal(|| None::<Proveedor>);
    let mut action_error = use_signal(|| None::<String>);

    let list_api = api.clone();
    let load = use_callback(move |term: String| {
        let api = list_api.clone();
        proveedores.run(async move { api.get_proveedores(Some(&term)).await });
    });

    use_effect(move || load.call(search()));

    let confirm_delete = move |_: ()| {
        let Some(proveedor) = deleting() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_proveedor(proveedor.id_proveedor).await {
                Ok(()) => load.call(search.peek().clone()),
                Err(e) => action_error.set(Some(e.to_string())),
            }
            deleting.set(None);
        });
    };

    let state = proveedores.state();
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
                            th { "Nombre" }
                            th { "Contacto" }
                            th { "Teléfono" }
                            th { "Email" }
                            th {}
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "5", class: "muted", "No hay proveedores." } }
                        }
                        for p in rows {
                            tr {
                                key: "{p.id_proveedor}",
                                td { "{p.nombre}" }
                                td { {p.contacto.clone().unwrap_or_default()} }
                                td { {p.telefono.clone().unwrap_or_default()} }
                                td { {p.email.clone().unwrap_or_default()} }
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
            h1 { "Proveedores" }
            Button {
                onclick: move |_| editor.set(Some(None)),
                "Nuevo proveedor"
            }
        }
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
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
            ProveedorForm {
                proveedor: current,
                on_saved: move |_| {
                    editor.set(None);
                    load.call(search.peek().clone());
                },
                on_cancel: move |_| editor.set(None),
            }
        }
        if let Some(proveedor) = deleting() {
            ConfirmDialog {
                title: "Eliminar proveedor",
                message: format!("¿Eliminar \"{}\"?", proveedor.nombre),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn ProveedorForm(
    proveedor: Option<Proveedor>,
    on_saved: EventHandler<Proveedor>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let initial = proveedor
        .as_ref()
        .map(ProveedorInput::from_proveedor)
        .unwrap_or_default();
    let editing_id = proveedor.as_ref().map(|p| p.id_proveedor);
    let title = if editing_id.is_some() { "Editar proveedor" } else { "Nuevo proveedor" };

    let mut nombre = use_signal(|| initial.nombre.clone());
    let mut contacto = use_signal(|| initial.contacto.clone().unwrap_or_default());
    let mut telefono = use_signal(|| initial.telefono.clone().unwrap_or_default());
    let mut email = use_signal(|| initial.email.clone().unwrap_or_default());
    let mut direccion = use_signal(|| initial.direccion.clone().unwrap_or_default());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = ProveedorInput {
            nombre: nombre().trim().to_string(),
            contacto: optional_text(&contacto()),
            telefono: optional_text(&telefono()),
            email: optional_text(&email()),
            direccion: optional_text(&direccion()),
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match editing_id {
                Some(id) => api.update_proveedor(id, &input).await,
                None => api.create_proveedor(&input).await,
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
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                Field {
                    label: "Nombre",
                    html_for: "proveedor-nombre",
                    Input { id: "proveedor-nombre", required: true, value: nombre(), oninput: move |v| nombre.set(v) }
                }
                Field {
                    label: "Contacto",
                    html_for: "proveedor-contacto",
                    Input { id: "proveedor-contacto", value: contacto(), oninput: move |v| contacto.set(v) }
                }
                div {
                    class: "field-row",
                    Field {
                        label: "Teléfono",
                        html_for: "proveedor-telefono",
                        Input { id: "proveedor-telefono", r#type: "tel", value: telefono(), oninput: move |v| telefono.set(v) }
                    }
                    Field {
                        label: "Email",
                        html_for: "proveedor-email",
                        Input { id: "proveedor-email", r#type: "email", value: email(), oninput: move |v| email.set(v) }
                    }
                }
                Field {
                    label: "Dirección",
                    html_for: "proveedor-direccion",
                    Input { id: "proveedor-direccion", value: direccion(), oninput: move |v| direccion.set(v) }
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
