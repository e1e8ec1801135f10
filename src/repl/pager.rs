//! Pagination bookkeeping for `map` / `mapb`.

use crate::models::LocationAreaPage;

/// Tracks the `next` and `previous` links of the last page shown.
///
/// Before the first page is fetched, `map` starts from the first page and
/// `mapb` has nowhere to go. After that, both links are replaced wholesale by
/// whatever the latest page reported, with an absent link meaning that end of
/// the listing has been reached.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    started: bool,
    next: Option<String>,
    previous: Option<String>,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL for `map`, or `None` on the last page.
    pub fn next_url(&self, first_page_url: impl FnOnce() -> String) -> Option<String> {
        if self.started {
            self.next.clone()
        } else {
            Some(first_page_url())
        }
    }

    /// URL for `mapb`, or `None` on the first page.
    pub fn previous_url(&self) -> Option<String> {
        self.previous.clone()
    }

    /// Records the links of a freshly shown page.
    pub fn advance(&mut self, page: &LocationAreaPage) {
        self.started = true;
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}
