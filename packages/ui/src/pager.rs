//! Pagination state of the article list.

/// Articles fetched per page.
pub const PAGE_SIZE: u32 = 10;

/// Current page index plus the page count the backend reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn previous(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Next page index, clamped to the last page.
    pub fn next(&self) -> u32 {
        if self.has_next() {
            self.page + 1
        } else {
            self.page
        }
    }

    /// Controls only make sense with something listed and somewhere to go.
    pub fn show_controls(&self, item_count: usize) -> bool {
        item_count > 0 && self.total_pages > 1
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}
