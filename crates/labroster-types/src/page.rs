use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Paginated response envelope shared by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default, alias = "previous")]
    pub prev: Option<String>,
}

impl<T> PageEnvelope<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            results: self.results.into_iter().map(f).collect(),
            count: self.count,
            next: self.next,
            prev: self.prev,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|link| !link.is_empty())
    }

    pub fn has_prev(&self) -> bool {
        self.prev.as_deref().is_some_and(|link| !link.is_empty())
    }
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            prev: None,
        }
    }
}

/// Current page and page count of a paged table. Both are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: u32,
    page_count: u32,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            page_count: 1,
        }
    }

    pub fn starting_at(page: u32) -> Result<Self> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }
        Ok(Self {
            current_page: page,
            page_count: page,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Recompute the page count from a freshly fetched envelope.
    ///
    /// The count is only derived from the first page (no `prev` link): a
    /// single page when there is no `next` link, otherwise
    /// `ceil(count / results on this page)`. Later pages leave it untouched.
    pub fn apply<T>(&mut self, envelope: &PageEnvelope<T>) {
        if envelope.has_prev() {
            return;
        }

        self.page_count = if envelope.has_next() {
            page_count_for(envelope.count, envelope.results.len())
        } else {
            1
        };
    }

    /// Select a page, clamped to `1..=page_count`. Returns whether the
    /// current page changed.
    pub fn select_page(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.page_count);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.select_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.select_page(self.current_page.saturating_sub(1))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

fn page_count_for(total: u64, page_len: usize) -> u32 {
    if page_len == 0 {
        return 1;
    }
    let pages = total.div_ceil(page_len as u64).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
