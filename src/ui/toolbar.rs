use dioxus::prelude::*;
use tracing::warn;

use crate::state::data_model::Header;
use crate::state::table_state::TableState;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    mut table: Signal<TableState>,
    error_message: Signal<Option<String>>,
    mut export_success: Signal<bool>,
) -> Element {
    let state = table.read();
    let applied_filters = state.has_applied_filters();
    let shown = state.working_set().len();
    let total = state.total_rows();
    let csv_export = state.config().enable_csv_export;
    let column_picker = state.config().show_column_picker;
    drop(state);

    rsx! {
        div { class: "top-controls",
            button {
                class: "toolbar-btn",
                id: "btn-open",
                onclick: move |_| {
                    spawn(async move {
                        actions::open_rows_file(table, error_message).await;
                    });
                },
                "\u{1F4C2} Open"
            }
            if applied_filters {
                button {
                    r#type: "button",
                    class: "filters-unapply",
                    id: "btn-unapply-filters",
                    title: "Remove every advanced filter",
                    onclick: move |_| {
                        table.with_mut(|state| state.unapply_all_filters());
                    },
                    "\u{1F704}"
                }
            }
            div { id: "row-count", "{shown} rows of {total}" }
            if csv_export {
                button {
                    class: "toolbar-btn",
                    id: "btn-export-csv",
                    title: "Export the current filter to a CSV file",
                    onclick: move |_| {
                        spawn(async move {
                            let exported = actions::export_csv(table, error_message).await;
                            if exported {
                                export_success.set(true);
                                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                export_success.set(false);
                            }
                        });
                    },
                    "CSV"
                }
                if *export_success.read() {
                    span { class: "save-success", "\u{2714} Exported" }
                }
            }
            if column_picker {
                ColumnPicker { table }
            }
            if let Some(err) = error_message.read().as_ref() {
                span { class: "error-message", "{err}" }
            }
        }
    }
}

#[component]
fn ColumnPicker(mut table: Signal<TableState>) -> Element {
    let mut open = use_signal(|| false);
    let state = table.read();
    let headers: Vec<Header> = state.headers().to_vec();
    let all_visible = state.all_columns_visible();
    drop(state);

    rsx! {
        div {
            class: "columns-multiselect",
            onmouseleave: move |_| open.set(false),
            button {
                r#type: "button",
                id: "btn-columns",
                onclick: move |_| {
                    let next = !*open.read();
                    open.set(next);
                },
                "Show/hide columns"
            }
            if *open.read() {
                div { class: "columns-multiselect-checkboxes",
                    label { class: "columns-multiselect-label-main",
                        input {
                            r#type: "checkbox",
                            checked: all_visible,
                            onclick: move |_| {
                                table.with_mut(|state| state.set_all_columns_visible(!all_visible));
                            }
                        }
                        " - All visible -"
                    }
                    br {}
                    for header in headers {
                        ColumnToggle { key: "{header.key}", table, header }
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnToggle(mut table: Signal<TableState>, header: Header) -> Element {
    let visible = header.checked;
    let key = header.key.clone();

    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: visible,
                onclick: move |_| {
                    let result = table.with_mut(|state| state.set_column_visible(&key, !visible));
                    if let Err(err) = result {
                        warn!(error = %err, "column toggle failed");
                    }
                }
            }
            " {header.title}"
        }
        br {}
    }
}
