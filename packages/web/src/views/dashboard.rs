use api::models::{Entrada, Salida};
use api::DashboardSummary;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, LoadingRow};
use ui::{use_dashboard, Loadable};

use super::short_date;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let dashboard = use_dashboard();
    let summary = dashboard.summary();

    let refreshing = summary.read().is_loading();
    let body = match &*summary.read() {
        Loadable::Loading => rsx! { LoadingRow {} },
        Loadable::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Loadable::Ready(summary) => rsx! { SummaryView { summary: summary.clone() } },
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Panel de control" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: refreshing,
                onclick: move |_| dashboard.refresh(),
                "Actualizar"
            }
        }
        {body}
    }
}

#[component]
fn SummaryView(summary: DashboardSummary) -> Element {
    let low_count = summary.stock_bajo.len();
    let alert_count = summary.alertas_pendientes.len();

    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Productos", value: summary.total_productos.to_string() }
            StatCard { label: "Unidades en stock", value: summary.unidades_en_stock.to_string() }
            StatCard { label: "Stock bajo", value: low_count.to_string(), warn: low_count > 0 }
            StatCard { label: "Alertas pendientes", value: alert_count.to_string(), warn: alert_count > 0 }
        }

        div {
            class: "panel-grid",
            section {
                class: "panel",
                h2 { "Stock bajo" }
                if summary.stock_bajo.is_empty() {
                    p { class: "muted", "Todos los productos están sobre su mínimo." }
                } else {
                    table {
                        thead { tr { th { "Producto" } th { "Stock" } th { "Mínimo" } } }
                        tbody {
                            for p in summary.stock_bajo.iter() {
                                tr {
                                    key: "{p.id_producto}",
                                    td { "{p.nombre}" }
                                    td { class: "danger", "{p.stock_actual}" }
                                    td { "{p.stock_minimo}" }
                                }
                            }
                        }
                    }
                }
                Link { to: Route::Productos {}, "Ver productos" }
            }

            section {
                class: "panel",
                h2 { "Alertas pendientes" }
                if summary.alertas_pendientes.is_empty() {
                    p { class: "muted", "Sin alertas." }
                } else {
                    ul {
                        for a in summary.alertas_pendientes.iter() {
                            li { key: "{a.id_alerta}", "{a.mensaje}" }
                        }
                    }
                }
                Link { to: Route::Alertas {}, "Ver alertas" }
            }

            section {
                class: "panel",
                h2 { "Últimas entradas" }
                MovementList { rows: summary.entradas_recientes.iter().map(entrada_row).collect::<Vec<_>>() }
            }

            section {
                class: "panel",
                h2 { "Últimas salidas" }
                MovementList { rows: summary.salidas_recientes.iter().map(salida_row).collect::<Vec<_>>() }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, #[props(default)] warn: bool) -> Element {
    rsx! {
        div {
            class: if warn { "stat-card stat-card--warn" } else { "stat-card" },
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

/// `(key, date, product id, quantity)`
type MovementRow = (i64, String, i64, i64);

fn entrada_row(e: &Entrada) -> MovementRow {
    (e.id_entrada, short_date(&e.fecha).to_string(), e.id_producto, e.cantidad)
}

fn salida_row(s: &Salida) -> MovementRow {
    (s.id_salida, short_date(&s.fecha).to_string(), s.id_producto, s.cantidad)
}

#[component]
fn MovementList(rows: Vec<MovementRow>) -> Element {
    if rows.is_empty() {
        return rsx! { p { class: "muted", "Sin movimientos." } };
    }
    rsx! {
        table {
            thead { tr { th { "Fecha" } th { "Producto" } th { "Cantidad" } } }
            tbody {
                for (id, fecha, producto, cantidad) in rows {
                    tr {
                        key: "{id}",
                        td { "{fecha}" }
                        td { "#{producto}" }
                        td { "{cantidad}" }
                    }
                }
            }
        }
    }
}
