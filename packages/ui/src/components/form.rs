use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: r#type,
            disabled,
            title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Label wrapping a control, with the control's id for accessibility.
#[component]
pub fn Field(label: String, html_for: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            label { r#for: "{html_for}", "{label}" }
            {children}
        }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] min: Option<String>,
    #[props(default)] step: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input",
            r#type: r#type,
            placeholder: "{placeholder}",
            required,
            min,
            step,
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Textarea(id: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input",
            rows: "3",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

/// `<select>` over `(value, label)` pairs. An empty `value` selects the
/// placeholder option.
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default = "Seleccione…".to_string())] placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", selected: value.is_empty(), "{placeholder}" }
            for (key, label) in options {
                option {
                    key: "{key}",
                    value: "{key}",
                    selected: key == value,
                    "{label}"
                }
            }
        }
    }
}
