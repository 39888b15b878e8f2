use api::models::{Page, Role, Usuario, UsuarioInput};
use dioxus::prelude::*;
use ui::components::{
    matches_search, paginate, Button, ButtonVariant, ConfirmDialog, ErrorBanner, Field, Input,
    LoadingRow, Pagination, SearchInput, Select, PAGE_SIZE,
};
use ui::views::ModalOverlay;
use ui::{use_api, use_latest_fetch, Loadable};

use super::{id_text, optional_id, optional_text, resolved, select_options};

#[component]
pub fn Usuarios() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut usuarios = use_latest_fetch::<Page<Usuario>>();
    let mut editor = use_signal(|| None::<Option<Usuario>>);
    let mut deleting = use_signal(|| None::<Usuario>);
    let mut action_error = use_signal(|| None::<String>);

    let list_api = api.clone();
    let load = use_callback(move |()| {
        let api = list_api.clone();
        usuarios.run(async move { api.get_usuarios(None).await });
    });

    use_effect(move || load.call(()));

    let confirm_delete = move |_: ()| {
        let Some(usuario) = deleting() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_usuario(usuario.id_usuario).await {
                Ok(()) => load.call(()),
                Err(e) => action_error.set(Some(e.to_string())),
            }
            deleting.set(None);
        });
    };

    let state = usuarios.state();
    let table = match &*state.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(list) => {
            let term = search();
            let filtered: Vec<Usuario> = list
                .items
                .iter()
                .filter(|u| matches_search(&[u.nombre.as_str(), u.apellido.as_str(), u.email.as_str()], &term))
                .cloned()
                .collect();
            let total = filtered.len();
            let rows = paginate(&filtered, page(), PAGE_SIZE).to_vec();
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Email" }
                            th { "Rol" }
                            th { "Estado" }
                            th {}
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "5", class: "muted", "No hay usuarios." } }
                        }
                        for u in rows {
                            tr {
                                key: "{u.id_usuario}",
                                td { "{u.nombre} {u.apellido}" }
                                td { "{u.email}" }
                                td { {u.role().label()} }
                                td { if u.activo { "Activo" } else { "Inactivo" } }
                                td {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let u = u.clone();
                                            move |_| editor.set(Some(Some(u.clone())))
                                        },
                                        "Editar"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let u = u.clone();
                                            move |_| deleting.set(Some(u.clone()))
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
                    total,
                    on_change: move |p| page.set(p),
                }
            }
        }
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Usuarios" }
            Button {
                onclick: move |_| editor.set(Some(None)),
                "Nuevo usuario"
            }
        }
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
                placeholder: "Buscar por nombre o email…",
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
            UsuarioForm {
                usuario: current,
                on_saved: move |_| {
                    editor.set(None);
                    load.call(());
                },
                on_cancel: move |_| editor.set(None),
            }
        }
        if let Some(usuario) = deleting() {
            ConfirmDialog {
                title: "Eliminar usuario",
                message: format!("¿Eliminar la cuenta de {}?", usuario.email),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn UsuarioForm(
    usuario: Option<Usuario>,
    on_saved: EventHandler<Usuario>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let initial = usuario.as_ref().map(UsuarioInput::from_usuario).unwrap_or(UsuarioInput {
        id_rol: Role::Asistente.id(),
        ..Default::default()
    });
    let editing_id = usuario.as_ref().map(|u| u.id_usuario);
    let title = if editing_id.is_some() { "Editar usuario" } else { "Nuevo usuario" };
    let password_label = if editing_id.is_some() {
        "Nueva contraseña (opcional)"
    } else {
        "Contraseña"
    };

    let mut nombre = use_signal(|| initial.nombre.clone());
    let mut apellido = use_signal(|| initial.apellido.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut password = use_signal(String::new);
    let mut rol = use_signal(|| id_text(Some(initial.id_rol)));
    let mut sucursal = use_signal(|| id_text(initial.id_sucursal));
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let catalog_api = api.clone();
    let catalogs = use_resource(move || {
        let api = catalog_api.clone();
        async move {
            let (roles, sucursales) =
                futures::try_join!(api.get_roles(), api.get_sucursales())?;
            Ok::<_, api::ApiError>((
                select_options(&roles.items, |r| r.id_rol, |r| r.nombre.clone()),
                select_options(&sucursales.items, |s| s.id_sucursal, |s| s.nombre.clone()),
            ))
        }
    });
    let ((roles, sucursales), catalog_error) = resolved(&catalogs.read());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = UsuarioInput {
            nombre: nombre().trim().to_string(),
            apellido: apellido().trim().to_string(),
            email: email().trim().to_string(),
            password: optional_text(&password()),
            id_rol: optional_id(&rol()).unwrap_or_default(),
            id_sucursal: optional_id(&sucursal()),
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match editing_id {
                Some(id) => api.update_usuario(id, &input).await,
                None => api.create_usuario(&input).await,
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
                div {
                    class: "field-row",
                    Field {
                        label: "Nombre",
                        html_for: "usuario-nombre",
                        Input { id: "usuario-nombre", required: true, value: nombre(), oninput: move |v| nombre.set(v) }
                    }
                    Field {
                        label: "Apellido",
                        html_for: "usuario-apellido",
                        Input { id: "usuario-apellido", required: true, value: apellido(), oninput: move |v| apellido.set(v) }
                    }
                }
                Field {
                    label: "Email",
                    html_for: "usuario-email",
                    Input { id: "usuario-email", r#type: "email", required: true, value: email(), oninput: move |v| email.set(v) }
                }
                Field {
                    label: password_label.to_string(),
                    html_for: "usuario-password",
                    Input {
                        id: "usuario-password",
                        r#type: "password",
                        required: editing_id.is_none(),
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                }
                Field {
                    label: "Rol",
                    html_for: "usuario-rol",
                    Select { id: "usuario-rol", value: rol(), options: roles, onchange: move |v| rol.set(v) }
                }
                Field {
                    label: "Sucursal",
                    html_for: "usuario-sucursal",
                    Select { id: "usuario-sucursal", value: sucursal(), options: sucursales, onchange: move |v| sucursal.set(v) }
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
