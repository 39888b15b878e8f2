use api::{DateRange, ReportFormat, ReportKind};
use dioxus::prelude::*;
use ui::components::{Button, ErrorBanner, Field, Input, Select};
use ui::{save_file, use_api};

use super::optional_text;

/// Export the backend's Excel/PDF reports, optionally limited to a date range.
#[component]
pub fn Reportes() -> Element {
    let api = use_api();
    let mut kind = use_signal(|| ReportKind::Inventario);
    let mut file_format = use_signal(|| ReportFormat::Excel);
    let mut desde = use_signal(String::new);
    let mut hasta = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut exporting = use_signal(|| false);

    let kind_options: Vec<(String, String)> = ReportKind::ALL
        .into_iter()
        .map(|k| (k.slug().to_string(), k.label().to_string()))
        .collect();
    let format_options = vec![
        (ReportFormat::Excel.slug().to_string(), "Excel (.xlsx)".to_string()),
        (ReportFormat::Pdf.slug().to_string(), "PDF".to_string()),
    ];

    let handle_export = move |evt: FormEvent| {
        evt.prevent_default();
        let range = match (optional_text(&desde()), optional_text(&hasta())) {
            (Some(desde), Some(hasta)) => Some(DateRange { desde, hasta }),
            (None, None) => None,
            _ => {
                error.set(Some("Indique ambas fechas o ninguna".to_string()));
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            exporting.set(true);
            error.set(None);
            notice.set(None);
            match api.export_report(kind(), file_format(), range.as_ref()).await {
                Ok(file) => match save_file(&file) {
                    Ok(()) => notice.set(Some(format!("Descargado {}", file.filename))),
                    Err(e) => error.set(Some(e)),
                },
                Err(e) => error.set(Some(e.to_string())),
            }
            exporting.set(false);
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Reportes" }
        }
        form {
            class: "panel report-form",
            onsubmit: handle_export,
            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
            div {
                class: "field-row",
                Field {
                    label: "Reporte",
                    html_for: "reporte-tipo",
                    Select {
                        id: "reporte-tipo",
                        value: kind().slug().to_string(),
                        options: kind_options,
                        onchange: move |v: String| {
                            if let Some(k) = ReportKind::from_slug(&v) {
                                kind.set(k);
                            }
                        },
                    }
                }
                Field {
                    label: "Formato",
                    html_for: "reporte-formato",
                    Select {
                        id: "reporte-formato",
                        value: file_format().slug().to_string(),
                        options: format_options,
                        onchange: move |v: String| {
                            if let Some(f) = ReportFormat::from_slug(&v) {
                                file_format.set(f);
                            }
                        },
                    }
                }
            }
            if kind().accepts_range() {
                div {
                    class: "field-row",
                    Field {
                        label: "Desde",
                        html_for: "reporte-desde",
                        Input { id: "reporte-desde", r#type: "date", value: desde(), oninput: move |v| desde.set(v) }
                    }
                    Field {
                        label: "Hasta",
                        html_for: "reporte-hasta",
                        Input { id: "reporte-hasta", r#type: "date", value: hasta(), oninput: move |v| hasta.set(v) }
                    }
                }
            }
            div {
                class: "modal-actions",
                Button {
                    r#type: "submit",
                    disabled: exporting(),
                    if exporting() { "Generando…" } else { "Descargar" }
                }
            }
        }
    }
}
