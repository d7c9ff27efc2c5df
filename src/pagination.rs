//! Page number state for the coin table.

/// Strictly positive, 1-indexed page counter.
///
/// There is no upper bound: paging past the last page yields an empty
/// page from the API rather than being blocked here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
}

impl Pagination {
    /// Starts at page 1.
    pub fn new() -> Self {
        Self { page: 1 }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether the "Prev" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// Moves back one page. Returns `false` (and does nothing) on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Moves forward one page. Always succeeds.
    pub fn next(&mut self) -> bool {
        self.page = self.page.saturating_add(1);
        true
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}
