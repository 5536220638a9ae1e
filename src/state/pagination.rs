use std::ops::Range;

/// Page windowing over a working set of `len` rows. Pages are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
    page_count: usize,
}

impl Pagination {
    /// `page_size` must be non-zero; callers validate it first.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            page_count: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Recomputes the page count for a new working set and returns to page 1.
    pub fn reset(&mut self, len: usize) {
        self.page_count = len.div_ceil(self.page_size);
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize, len: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.reset(len);
        true
    }

    /// Direct navigation. Out-of-range requests are rejected, not clamped.
    pub fn show_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.page_count {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Index range of the current page inside a working set of `len` rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}
