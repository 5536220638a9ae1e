use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::state::data_model::{Header, Row, RowId};
use crate::state::render::CellRenderers;
use crate::state::sort::{SortOrder, SortSpec};
use crate::state::table_state::TableState;

pub type ElementRenderers = Rc<CellRenderers<Element>>;

#[derive(Clone, Debug, PartialEq)]
struct HeaderFilter {
    text: String,
    is_regexp: bool,
}

#[component]
pub fn DataTable(mut table: Signal<TableState>, advanced_key: Signal<Option<String>>) -> Element {
    let renderers = use_context::<ElementRenderers>();

    let state = table.read();
    let multi_select = state.config().enable_multi_select;
    let headers: Vec<Header> = state.visible_headers().into_iter().cloned().collect();
    let filters: Vec<HeaderFilter> = headers
        .iter()
        .map(|h| {
            state
                .filter(&h.key)
                .map(|f| HeaderFilter {
                    text: f.text.clone(),
                    is_regexp: f.is_regexp,
                })
                .unwrap_or(HeaderFilter {
                    text: String::new(),
                    is_regexp: false,
                })
        })
        .collect();
    let sort_spec = state.sort_spec().cloned();
    let all_selected = state.all_selected();
    let selected_only = state.selected_only();
    let page: Vec<(RowId, Row)> = state
        .page_rows()
        .iter()
        .filter_map(|id| state.row(*id).map(|row| (*id, row.clone())))
        .collect();
    drop(state);

    let has_detail = renderers.has_detail();
    let colspan = headers.len() + usize::from(multi_select) + usize::from(has_detail);
    let selected_only_class = if selected_only { "filter-advanced" } else { "" };

    rsx! {
        div { class: "table-container", id: "table-container",
            table { class: "table",
                thead {
                    tr {
                        if multi_select {
                            th {
                                input {
                                    r#type: "checkbox",
                                    id: "check-all",
                                    checked: all_selected,
                                    onclick: move |_| {
                                        table.with_mut(|state| state.set_all_rows_checked(!all_selected));
                                    }
                                }
                                button {
                                    r#type: "button",
                                    class: "{selected_only_class}",
                                    title: "Show selected rows only",
                                    onclick: move |_| {
                                        table.with_mut(|state| state.set_selected_only(!selected_only));
                                    },
                                    "\u{2611}"
                                }
                            }
                        }
                        if has_detail {
                            th { "\u{00A0}" }
                        }
                        for (header, filter) in headers.iter().zip(filters) {
                            HeaderCell {
                                key: "{header.key}",
                                table,
                                advanced_key,
                                header: header.clone(),
                                filter_text: filter.text,
                                is_regexp: filter.is_regexp,
                                sort_class: sort_class(&header.key, sort_spec.as_ref()),
                            }
                        }
                    }
                }
                tbody {
                    for (id, row) in page {
                        DataRow {
                            key: "{id.0}",
                            table,
                            id,
                            row,
                            headers: headers.clone(),
                            multi_select,
                            colspan,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderCell(
    mut table: Signal<TableState>,
    mut advanced_key: Signal<Option<String>>,
    header: Header,
    filter_text: String,
    is_regexp: bool,
    sort_class: String,
) -> Element {
    let advanced_class = if is_regexp { "filter-advanced" } else { "" };
    let sort_key = header.key.clone();
    let filter_key = header.key.clone();
    let dialog_key = header.key.clone();

    rsx! {
        th { class: "{sort_class}",
            if header.show_filter {
                div { class: "filter-controls",
                    span {
                        class: "sort",
                        title: "Sort ascending, descending, or restore the original order",
                        onclick: move |_| {
                            let result = table.with_mut(|state| state.sort_by_column_toggle(&sort_key));
                            if let Err(err) = result {
                                warn!(error = %err, "sort failed");
                            }
                        },
                        "\u{21C5}"
                    }
                    input {
                        r#type: "text",
                        class: "input-filter",
                        id: format!("filter-{}", sanitize_id(&header.key)),
                        title: "Filter by text; case and accents are ignored",
                        value: "{filter_text}",
                        oninput: move |evt| {
                            let text = evt.value();
                            let result = table.with_mut(|state| state.set_filter_text(&filter_key, &text));
                            if let Err(err) = result {
                                warn!(error = %err, "filter update failed");
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "{advanced_class}",
                        title: "Advanced filter",
                        onclick: move |_| {
                            advanced_key.set(Some(dialog_key.clone()));
                        },
                        "\u{2699}"
                    }
                }
            }
            "{header.title}"
        }
    }
}

#[component]
fn DataRow(
    mut table: Signal<TableState>,
    id: RowId,
    row: Row,
    headers: Vec<Header>,
    multi_select: bool,
    colspan: usize,
) -> Element {
    let renderers = use_context::<ElementRenderers>();
    let checked = row.checked;
    let expand_marker = if row.expand { "\u{2228}" } else { ">" };
    let detail = if row.expand {
        renderers.render_detail(&row)
    } else {
        None
    };

    rsx! {
        tr { id: "row-{id.0}",
            if multi_select {
                td {
                    input {
                        r#type: "checkbox",
                        checked: checked,
                        onclick: move |_| {
                            let result = table.with_mut(|state| state.set_row_checked(id, !checked));
                            if let Err(err) = result {
                                warn!(error = %err, "row selection failed");
                            }
                        }
                    }
                }
            }
            if renderers.has_detail() {
                td {
                    button {
                        r#type: "button",
                        class: "expand-toggle",
                        onclick: move |_| {
                            let result = table.with_mut(|state| state.toggle_expand(id));
                            if let Err(err) = result {
                                warn!(error = %err, "expand toggle failed");
                            }
                        },
                        "{expand_marker}"
                    }
                }
            }
            for header in headers.iter() {
                td { key: "{header.key}",
                    {renderers.render(&header.key, &row).unwrap_or_else(|| rsx! { "{row.display(&header.key)}" })}
                }
            }
        }
        if let Some(detail) = detail {
            tr { class: "detail-row",
                td { colspan: "{colspan}", {detail} }
            }
        }
    }
}

fn sort_class(key: &str, spec: Option<&SortSpec>) -> String {
    match spec {
        Some(spec) if spec.column == key => match spec.order {
            SortOrder::Asc => "sorted-asc".to_string(),
            SortOrder::Desc => "sorted-desc".to_string(),
        },
        _ => String::new(),
    }
}

fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
