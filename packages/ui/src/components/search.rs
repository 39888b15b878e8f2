use dioxus::prelude::*;

/// Case-insensitive substring match of `term` against any of `fields`.
/// A blank term matches everything.
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&term))
}

#[component]
pub fn SearchInput(
    value: String,
    #[props(default = "Buscar…".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "input search-input",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| on_search.call(evt.value()),
        }
    }
}
