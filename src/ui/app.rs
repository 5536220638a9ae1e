use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::io::config_io;
use crate::state::config::TableConfig;
use crate::state::data_model::Header;
use crate::state::events::TableEvent;
use crate::state::render::CellRenderers;
use crate::state::table_state::TableState;
use crate::ui::actions;
use crate::ui::advanced_filter::AdvancedFilterPanel;
use crate::ui::paginator::Paginator;
use crate::ui::table::{DataTable, ElementRenderers};
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let table = use_signal(|| {
        let mut state = TableState::new(default_headers(), startup_config());
        state.subscribe(log_event);
        state
    });
    let error_message = use_signal::<Option<String>>(|| None);
    let export_success = use_signal(|| false);
    let advanced_key = use_signal::<Option<String>>(|| None);
    use_context_provider::<ElementRenderers>(|| Rc::new(default_renderers()));

    use_effect(move || {
        if let Ok(path) = std::env::var("TABLEQUICK_OPEN") {
            actions::load_rows_into(table, error_message, &PathBuf::from(path));
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { table, error_message, export_success }
            DataTable { table, advanced_key }
            Paginator { table }
            AdvancedFilterPanel { table, advanced_key }
        }
    }
}

/// Columns of the photo listing the desktop app opens by default.
fn default_headers() -> Vec<Header> {
    vec![
        Header::new("ID", "id", true),
        Header::new("Title", "title", true),
        Header::new("URL", "url", true),
        Header::new("Thumbnail URL", "thumbnailUrl", false),
    ]
}

fn default_renderers() -> CellRenderers<Element> {
    let mut renderers = CellRenderers::new();
    renderers.register("thumbnailUrl", |row| {
        let src = row.display("thumbnailUrl");
        rsx! {
            img { src: "{src}", width: "150", alt: "Thumbnail" }
        }
    });
    renderers.set_detail(|row| {
        let json = serde_json::to_string_pretty(&row.cells).unwrap_or_default();
        rsx! {
            pre { class: "row-detail", "{json}" }
        }
    });
    renderers
}

fn startup_config() -> TableConfig {
    let Ok(path) = std::env::var("TABLEQUICK_CONFIG") else {
        return TableConfig {
            enable_multi_select: true,
            ..TableConfig::default()
        };
    };
    match config_io::load_config(&PathBuf::from(&path)) {
        Ok(config) => config,
        Err(err) => {
            warn!(path, error = %err, "falling back to default config");
            TableConfig::default()
        }
    }
}

fn log_event(event: &TableEvent) {
    match event {
        TableEvent::FilterChanged(rows) => debug!(rows = rows.len(), "filter changed"),
        TableEvent::PageChanged(rows) => debug!(rows = rows.len(), "page changed"),
        TableEvent::SelectionChanged(rows) => debug!(rows = rows.len(), "selection changed"),
        TableEvent::SelectedColumnsChanged(keys) => debug!(?keys, "selected columns changed"),
        TableEvent::ExpandChanged { expanded, row } => {
            debug!(expanded, %row, "expand changed")
        }
    }
}
