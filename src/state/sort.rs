use std::cmp::Ordering;

use crate::state::compare::compare_cells;
use crate::state::data_model::{Row, RowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

/// Tri-state sort cycle over the working set: unsorted, ascending,
/// descending, unsorted again. `unordered` holds the pre-sort order and is
/// non-empty exactly while a sort is engaged on a non-empty working set.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SortController {
    spec: Option<SortSpec>,
    unordered: Vec<RowId>,
}

impl SortController {
    pub fn spec(&self) -> Option<&SortSpec> {
        self.spec.as_ref()
    }

    /// Drops the sort without touching the working set; used when the
    /// working set is rebuilt by filtering.
    pub fn reset(&mut self) {
        self.spec = None;
        self.unordered.clear();
    }

    /// Advances the cycle for `column`, reordering `working` in place.
    /// Clicking a different column mid-cycle first restores the pre-sort
    /// order and then starts a fresh ascending sort.
    pub fn toggle(&mut self, column: &str, working: &mut Vec<RowId>, rows: &[Row]) {
        if let Some(spec) = &self.spec {
            if spec.column != column {
                *working = std::mem::take(&mut self.unordered);
                self.spec = None;
            }
        }

        match self.spec.as_ref().map(|spec| spec.order) {
            None => {
                self.unordered = working.clone();
                stable_sort_by(working, |a, b| {
                    compare_cells(cell(rows, *a, column), cell(rows, *b, column))
                });
                self.spec = Some(SortSpec {
                    column: column.to_string(),
                    order: SortOrder::Asc,
                });
            }
            Some(SortOrder::Asc) => {
                working.reverse();
                if let Some(spec) = self.spec.as_mut() {
                    spec.order = SortOrder::Desc;
                }
            }
            Some(SortOrder::Desc) => {
                *working = std::mem::take(&mut self.unordered);
                self.spec = None;
            }
        }
    }
}

fn cell<'a>(rows: &'a [Row], id: RowId, column: &str) -> Option<&'a serde_json::Value> {
    rows.get(id.0).and_then(|row| row.get(column))
}

/// Bottom-up merge sort. Stable, and never panics whatever `compare`
/// returns: `compare_cells` is not a total order on mixed-type columns or on
/// equal dates, which `slice::sort_by` may reject with a panic.
pub fn stable_sort_by<T: Copy>(items: &mut Vec<T>, mut compare: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    let mut buf = items.clone();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut buf[start..end] {
                let take_left =
                    right >= end || (left < mid && compare(&items[right], &items[left]) != Ordering::Less);
                if take_left {
                    *slot = items[left];
                    left += 1;
                } else {
                    *slot = items[right];
                    right += 1;
                }
            }
            start = end;
        }
        std::mem::swap(items, &mut buf);
        width *= 2;
    }
}
