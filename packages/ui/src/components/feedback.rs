use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;

/// Red banner for a user-visible error message.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span { "{message}" }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "error-banner-close",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

#[component]
pub fn LoadingRow(#[props(default = "Cargando…".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading-row", "{label}" }
    }
}

/// Yes/no confirmation in a modal; used before every delete.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Eliminar".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| on_cancel.call(()),
            p { class: "confirm-message", "{message}" }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
