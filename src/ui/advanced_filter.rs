use dioxus::prelude::{Key, *};
use tracing::warn;

use crate::state::filter::RegExpType;
use crate::state::table_state::TableState;

/// Editor for one column's advanced filter. Rendered while `advanced_key`
/// names a column; closing clears it.
#[component]
pub fn AdvancedFilterPanel(
    mut table: Signal<TableState>,
    mut advanced_key: Signal<Option<String>>,
) -> Element {
    let mut panel_error = use_signal::<Option<String>>(|| None);

    let Some(key) = advanced_key.read().clone() else {
        return rsx! {};
    };

    let state = table.read();
    let title = state
        .headers()
        .iter()
        .find(|h| h.key == key)
        .map(|h| h.title.clone())
        .unwrap_or_else(|| key.clone());
    let Some(filter) = state.filter(&key).cloned() else {
        return rsx! {};
    };
    drop(state);

    let mode_code = filter.regexp_type.code();

    let mut apply = move |key: &str, close: bool| {
        let result = table.with_mut(|state| state.apply_advanced_filter(key));
        match result {
            Ok(_) => {
                panel_error.set(None);
                if close {
                    advanced_key.set(None);
                }
            }
            Err(err) => panel_error.set(Some(err.to_string())),
        }
    };

    let key_for_mode = key.clone();
    let key_for_add = key.clone();
    let key_for_apply = key.clone();
    let key_for_apply_close = key.clone();
    let key_for_unapply = key.clone();

    rsx! {
        div { class: "dialog-modal", id: "advanced-filter",
            h3 { class: "dialog-modal-title", "Advanced filter [{title}]" }
            div { class: "dialog-header",
                select {
                    title: "Filter mode",
                    value: "{mode_code}",
                    onchange: move |evt| {
                        if let Some(mode) = RegExpType::from_code(&evt.value()) {
                            let result = table.with_mut(|state| state.set_advanced_type(&key_for_mode, mode));
                            if let Err(err) = result {
                                warn!(error = %err, "filter mode change failed");
                            }
                        }
                    },
                    for mode in RegExpType::all() {
                        option {
                            key: "{mode.code()}",
                            value: "{mode.code()}",
                            selected: mode == filter.regexp_type,
                            "{mode.label()}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    title: "Apply and keep editing",
                    onclick: move |_| apply(&key_for_apply, false),
                    "Apply"
                }
                button {
                    r#type: "button",
                    title: "Add an alternative",
                    onclick: move |_| {
                        let result = table.with_mut(|state| state.add_advanced_field(&key_for_add));
                        if let Err(err) = result {
                            warn!(error = %err, "adding filter alternative failed");
                        }
                    },
                    "+"
                }
            }
            div { class: "dialog-body",
                for (index, field) in filter.regexp_fields.iter().enumerate() {
                    FragmentInput {
                        key: "{index}",
                        table,
                        column: key.clone(),
                        index,
                        value: field.clone(),
                        on_enter: move |column: String| apply(&column, false),
                    }
                }
            }
            if let Some(err) = panel_error.read().as_ref() {
                p { class: "error-message", "{err}" }
            }
            div { class: "dialog-footer",
                button {
                    r#type: "button",
                    title: "Apply and close",
                    onclick: move |_| apply(&key_for_apply_close, true),
                    "Apply and close"
                }
                button {
                    r#type: "button",
                    title: "Close without applying",
                    onclick: move |_| {
                        panel_error.set(None);
                        advanced_key.set(None);
                    },
                    "Close"
                }
                button {
                    r#type: "button",
                    title: "Remove this filter and close",
                    onclick: move |_| {
                        let result = table.with_mut(|state| state.unapply_advanced_filter(&key_for_unapply));
                        if let Err(err) = result {
                            warn!(error = %err, "unapplying advanced filter failed");
                        }
                        panel_error.set(None);
                        advanced_key.set(None);
                    },
                    "Unapply and close"
                }
            }
        }
    }
}

#[component]
fn FragmentInput(
    mut table: Signal<TableState>,
    column: String,
    index: usize,
    value: String,
    on_enter: EventHandler<String>,
) -> Element {
    let edit_column = column.clone();
    let remove_column = column.clone();

    rsx! {
        div {
            input {
                r#type: "text",
                title: "Text to match for this alternative",
                value: "{value}",
                oninput: move |evt| {
                    let text = evt.value();
                    let result = table.with_mut(|state| state.set_advanced_field(&edit_column, index, text));
                    if let Err(err) = result {
                        warn!(error = %err, "editing filter alternative failed");
                    }
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        on_enter.call(column.clone());
                    }
                }
            }
            button {
                r#type: "button",
                title: "Remove this alternative",
                disabled: index == 0,
                onclick: move |_| {
                    let result = table.with_mut(|state| state.remove_advanced_field(&remove_column, index));
                    if let Err(err) = result {
                        warn!(error = %err, "removing filter alternative failed");
                    }
                },
                "-"
            }
            span { " or " }
        }
    }
}
