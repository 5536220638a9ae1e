use dioxus::prelude::{Key, *};
use tracing::warn;

use crate::state::table_state::TableState;

#[component]
pub fn Paginator(mut table: Signal<TableState>) -> Element {
    let mut page_draft = use_signal(String::new);

    let state = table.read();
    let visible = state.config().show_pagination_controls;
    let options = state.config().page_size_options.clone();
    let current_page = state.current_page();
    let page_count = state.page_count();
    let page_size = state.page_size();
    drop(state);

    if !visible {
        return rsx! {};
    }

    let draft = page_draft.read().clone();
    let page_value = if draft.is_empty() {
        current_page.to_string()
    } else {
        draft
    };

    rsx! {
        div { class: "paginator-controls",
            button {
                r#type: "button",
                id: "btn-prev-page",
                onclick: move |_| {
                    table.with_mut(|state| state.prev_page());
                    page_draft.set(String::new());
                },
                "\u{25C0}"
            }
            " Page "
            input {
                r#type: "number",
                id: "input-page",
                min: "1",
                max: "{page_count}",
                value: "{page_value}",
                oninput: move |evt| page_draft.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() != Key::Enter {
                        return;
                    }
                    let requested = page_draft.read().trim().parse::<usize>().ok();
                    if let Some(page) = requested {
                        table.with_mut(|state| state.show_page(page));
                    }
                    page_draft.set(String::new());
                }
            }
            " of {page_count} "
            button {
                r#type: "button",
                id: "btn-next-page",
                onclick: move |_| {
                    table.with_mut(|state| state.next_page());
                    page_draft.set(String::new());
                },
                "\u{25B6}"
            }
            label {
                " Rows/page "
                select {
                    id: "select-page-size",
                    value: "{page_size}",
                    onchange: move |evt| {
                        let Ok(size) = evt.value().parse::<usize>() else {
                            return;
                        };
                        if let Err(err) = table.with_mut(|state| state.set_page_size(size)) {
                            warn!(error = %err, "page size rejected");
                        }
                        page_draft.set(String::new());
                    },
                    for option in options {
                        option {
                            key: "{option}",
                            value: "{option}",
                            selected: option == page_size,
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}
