use tracing::{debug, info, warn};

use crate::state::config::TableConfig;
use crate::state::csv;
use crate::state::data_model::{Header, Row, RowId};
use crate::state::error::TableError;
use crate::state::events::{EventBus, TableEvent};
use crate::state::filter::{self, FilterState, RegExpType};
use crate::state::pagination::Pagination;
use crate::state::selection::Selection;
use crate::state::sort::{SortController, SortSpec};

/// Owns the rows and every piece of derived table state, and keeps them
/// consistent: filters produce the working set, the sort reorders it, the
/// paginator windows it. Each mutating call recomputes what it invalidates
/// and notifies subscribers.
#[derive(Debug)]
pub struct TableState {
    headers: Vec<Header>,
    rows: Vec<Row>,
    config: TableConfig,
    filters: Vec<FilterState>,
    working: Vec<RowId>,
    page: Vec<RowId>,
    sort: SortController,
    pagination: Pagination,
    selection: Selection,
    selected_only: bool,
    events: EventBus,
}

impl TableState {
    pub fn new(headers: Vec<Header>, config: TableConfig) -> Self {
        let pagination = Pagination::new(config.page_size);
        let mut state = Self {
            headers,
            rows: Vec::new(),
            config,
            filters: Vec::new(),
            working: Vec::new(),
            page: Vec::new(),
            sort: SortController::default(),
            pagination,
            selection: Selection::default(),
            selected_only: false,
            events: EventBus::default(),
        };
        state.reinitialize();
        state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) {
        self.events.subscribe(listener);
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Headers whose column is currently shown, in header order.
    pub fn visible_headers(&self) -> Vec<&Header> {
        self.headers.iter().filter(|h| h.checked).collect()
    }

    pub fn selected_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| h.checked)
            .map(|h| h.key.clone())
            .collect()
    }

    pub fn all_columns_visible(&self) -> bool {
        self.headers.iter().all(|h| h.checked)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id.0)
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Rows passing the active filters, in display order.
    pub fn working_set(&self) -> &[RowId] {
        &self.working
    }

    /// The slice of the working set on the current page.
    pub fn page_rows(&self) -> &[RowId] {
        &self.page
    }

    pub fn filters(&self) -> &[FilterState] {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&FilterState> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.spec()
    }

    pub fn selected_only(&self) -> bool {
        self.selected_only
    }

    pub fn selected_rows(&self) -> &[RowId] {
        self.selection.rows()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selection.contains(id)
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count()
    }

    /// Replaces the whole row collection and reruns initialization. The
    /// selection is rebuilt from the incoming rows' `checked` flags.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        info!(rows = rows.len(), "rows replaced");
        self.rows = rows;
        let checked: Vec<RowId> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.checked)
            .map(|(idx, _)| RowId(idx))
            .collect();
        self.selection.replace(&checked);
        self.reinitialize();
    }

    /// Grows the row collection, keeping existing ids and selection.
    pub fn append_rows(&mut self, rows: Vec<Row>) {
        if rows.is_empty() {
            return;
        }
        info!(added = rows.len(), total = self.rows.len() + rows.len(), "rows appended");
        let first = self.rows.len();
        for (offset, row) in rows.iter().enumerate() {
            if row.checked {
                self.selection.set(RowId(first + offset), true);
            }
        }
        self.rows.extend(rows);
        self.reinitialize();
    }

    /// Replaces the header list; every column becomes visible again.
    pub fn set_headers(&mut self, headers: Vec<Header>) {
        self.headers = headers;
        self.set_all_columns_visible(true);
    }

    pub fn set_filter_text(&mut self, key: &str, text: &str) -> Result<(), TableError> {
        self.filter_mut(key)?.set_text(text);
        self.refilter();
        Ok(())
    }

    pub fn set_selected_only(&mut self, selected_only: bool) {
        if self.selected_only == selected_only {
            return;
        }
        self.selected_only = selected_only;
        self.refilter();
    }

    /// Advances the unsorted/ascending/descending cycle on `column`.
    pub fn sort_by_column_toggle(&mut self, column: &str) -> Result<(), TableError> {
        if !self.headers.iter().any(|h| h.key == column) {
            warn!(column, "sort requested on unknown column");
            return Err(TableError::UnknownColumn(column.to_string()));
        }

        self.sort.toggle(column, &mut self.working, &self.rows);
        debug!(column, spec = ?self.sort.spec(), "sort toggled");
        self.pagination.reset(self.working.len());
        self.refresh_page();
        self.emit_working_set();
        Ok(())
    }

    pub fn set_advanced_type(&mut self, key: &str, mode: RegExpType) -> Result<(), TableError> {
        self.filter_mut(key)?.regexp_type = mode;
        Ok(())
    }

    pub fn add_advanced_field(&mut self, key: &str) -> Result<(), TableError> {
        self.filter_mut(key)?.add_field();
        Ok(())
    }

    pub fn remove_advanced_field(&mut self, key: &str, index: usize) -> Result<bool, TableError> {
        Ok(self.filter_mut(key)?.remove_field(index))
    }

    pub fn set_advanced_field(
        &mut self,
        key: &str,
        index: usize,
        value: String,
    ) -> Result<bool, TableError> {
        Ok(self.filter_mut(key)?.set_field(index, value))
    }

    /// Builds the column's pattern from its mode and fragments and filters
    /// with it. An invalid pattern leaves the filter exactly as it was.
    /// Returns whether an advanced filter is now active on the column.
    pub fn apply_advanced_filter(&mut self, key: &str) -> Result<bool, TableError> {
        let filter = self.filter_mut(key)?;
        let active = match filter.apply_advanced() {
            Ok(active) => active,
            Err(source) => {
                let pattern = filter::build_pattern(filter.regexp_type, &filter.regexp_fields);
                warn!(key, %pattern, error = %source, "advanced filter rejected");
                return Err(TableError::InvalidPattern {
                    key: key.to_string(),
                    pattern,
                    source: Box::new(source),
                });
            }
        };
        debug!(key, pattern = %filter.text, active, "advanced filter applied");
        self.refilter();
        Ok(active)
    }

    pub fn unapply_advanced_filter(&mut self, key: &str) -> Result<(), TableError> {
        self.filter_mut(key)?.unapply_advanced();
        self.refilter();
        Ok(())
    }

    pub fn unapply_all_filters(&mut self) {
        for filter in self.filters.iter_mut().filter(|f| f.is_regexp) {
            filter.unapply_advanced();
        }
        self.refilter();
    }

    /// True while any column has an advanced filter applied.
    pub fn has_applied_filters(&self) -> bool {
        self.filters.iter().any(|f| f.is_regexp)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if !self.pagination.set_page_size(page_size, self.working.len()) {
            return Err(TableError::InvalidPageSize(page_size));
        }
        self.refresh_page();
        self.emit_page();
        Ok(())
    }

    /// Out-of-range pages are ignored and reported as `false`.
    pub fn show_page(&mut self, page: usize) -> bool {
        if !self.pagination.show_page(page) {
            debug!(page, page_count = self.page_count(), "page request out of range");
            return false;
        }
        self.refresh_page();
        self.emit_page();
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.pagination.next_page() {
            return false;
        }
        self.refresh_page();
        self.emit_page();
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.pagination.prev_page() {
            return false;
        }
        self.refresh_page();
        self.emit_page();
        true
    }

    pub fn set_row_checked(&mut self, id: RowId, checked: bool) -> Result<(), TableError> {
        let row = self.rows.get_mut(id.0).ok_or(TableError::UnknownRow(id))?;
        row.checked = checked;
        self.selection.set(id, checked);
        self.emit_selection();
        Ok(())
    }

    /// Header checkbox. Checking selects the whole working set, not only the
    /// visible page; unchecking clears the selection. Rows that leave the
    /// selection are unmarked either way.
    pub fn set_all_rows_checked(&mut self, checked: bool) {
        for id in self.selection.rows() {
            if let Some(row) = self.rows.get_mut(id.0) {
                row.checked = false;
            }
        }

        if checked {
            for id in &self.working {
                if let Some(row) = self.rows.get_mut(id.0) {
                    row.checked = true;
                }
            }
            self.selection.replace(&self.working);
        } else {
            for id in &self.working {
                if let Some(row) = self.rows.get_mut(id.0) {
                    row.checked = false;
                }
            }
            self.selection.clear();
        }
        self.emit_selection();
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(self.working.len(), &self.page)
    }

    pub fn set_column_visible(&mut self, key: &str, visible: bool) -> Result<(), TableError> {
        let header = self
            .headers
            .iter_mut()
            .find(|h| h.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        header.checked = visible;
        self.columns_changed();
        Ok(())
    }

    pub fn set_all_columns_visible(&mut self, visible: bool) {
        for header in &mut self.headers {
            header.checked = visible;
        }
        self.columns_changed();
    }

    /// Flips the row's detail panel and returns the new state.
    pub fn toggle_expand(&mut self, id: RowId) -> Result<bool, TableError> {
        let row = self.rows.get_mut(id.0).ok_or(TableError::UnknownRow(id))?;
        row.expand = !row.expand;
        let expanded = row.expand;
        self.events.emit(TableEvent::ExpandChanged { expanded, row: id });
        Ok(expanded)
    }

    /// The working set as CSV over the visible columns, without BOM.
    pub fn to_csv(&self) -> String {
        let headers = self.visible_headers();
        let rows = self.working.iter().filter_map(|id| self.rows.get(id.0));
        csv::rows_to_csv(&headers, rows)
    }

    /// CSV ready for download: BOM-prefixed.
    pub fn export_csv(&self) -> String {
        csv::with_byte_order_mark(&self.to_csv())
    }

    fn filter_mut(&mut self, key: &str) -> Result<&mut FilterState, TableError> {
        self.filters
            .iter_mut()
            .find(|f| f.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))
    }

    fn reinitialize(&mut self) {
        let hidden = self.headers.iter().any(|h| !h.checked);
        for header in &mut self.headers {
            header.checked = true;
        }
        self.filters = FilterState::for_headers(&self.headers);
        if hidden {
            self.events
                .emit(TableEvent::SelectedColumnsChanged(self.selected_columns()));
        }
        self.refilter();
    }

    fn columns_changed(&mut self) {
        self.filters = FilterState::for_headers(&self.headers);
        self.events
            .emit(TableEvent::SelectedColumnsChanged(self.selected_columns()));
        self.refilter();
    }

    /// Rebuilds the working set from the filters, dropping any sort.
    fn refilter(&mut self) {
        self.sort.reset();
        self.working = self.compute_working_set();
        self.pagination.reset(self.working.len());
        self.refresh_page();
        debug!(
            working = self.working.len(),
            total = self.rows.len(),
            pages = self.page_count(),
            "working set recomputed"
        );
        self.emit_working_set();
    }

    fn compute_working_set(&self) -> Vec<RowId> {
        let ids = self.rows.iter().enumerate();

        if self.selected_only {
            return ids
                .filter(|(_, row)| row.checked)
                .map(|(idx, _)| RowId(idx))
                .collect();
        }

        let active = filter::active_filters(&self.filters);
        if active.is_empty() {
            return (0..self.rows.len()).map(RowId).collect();
        }

        ids.filter(|(_, row)| filter::row_matches(row, &active))
            .map(|(idx, _)| RowId(idx))
            .collect()
    }

    fn refresh_page(&mut self) {
        let range = self.pagination.range(self.working.len());
        self.page = self.working[range].to_vec();
    }

    fn emit_working_set(&mut self) {
        self.events
            .emit(TableEvent::FilterChanged(self.working.clone()));
        self.emit_page();
    }

    fn emit_page(&mut self) {
        self.events.emit(TableEvent::PageChanged(self.page.clone()));
    }

    fn emit_selection(&mut self) {
        self.events
            .emit(TableEvent::SelectionChanged(self.selection.rows().to_vec()));
    }
}
