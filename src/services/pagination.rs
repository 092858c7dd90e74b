// src/services/pagination.rs
// DOCUMENTATION: Page-number resolution and compact page selectors
// PURPOSE: Turn a raw `?page=` value into a valid page and an elided list of page links

use serde::Serialize;
use std::num::IntErrorKind;

/// Reviews shown per page
pub const REVIEWS_PER_PAGE: u64 = 3;

/// Pages shown on each side of the current page
pub const ON_EACH_SIDE: u64 = 1;

/// Pages always shown at the start and at the end
pub const ON_ENDS: u64 = 1;

/// One entry of an elided page range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    /// Placeholder for a collapsed run of omitted pages
    Ellipsis,
}

/// Page-range entry in the shape templates consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: Option<u64>,
    pub is_current: bool,
    pub is_gap: bool,
}

/// Splits `count` items into pages of `per_page`
///
/// Pure arithmetic; knows nothing about where the items live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
}

impl Paginator {
    /// `per_page` of zero is treated as one
    pub fn new(count: u64, per_page: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Always at least 1: an empty collection still has one (empty) page
    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// Resolve a client-supplied page number
    ///
    /// Missing or non-numeric input yields page 1; numbers below 1 clamp to 1
    /// and numbers past the end clamp to the last page. Never fails.
    pub fn resolve_page(&self, raw: Option<&str>) -> u64 {
        let raw = match raw {
            Some(raw) => raw.trim(),
            None => return 1,
        };

        let requested = match raw.parse::<i64>() {
            Ok(n) => n,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => return self.num_pages(),
            Err(_) => return 1,
        };

        if requested < 1 {
            1
        } else {
            (requested as u64).min(self.num_pages())
        }
    }

    /// Offset of the first item on `page` (1-based, assumed valid)
    pub fn offset(&self, page: u64) -> u64 {
        (page.max(1) - 1) * self.per_page
    }

    /// Number of items on `page`
    pub fn page_len(&self, page: u64) -> u64 {
        let start = self.offset(page);
        self.count.saturating_sub(start).min(self.per_page)
    }

    /// Page numbers with gaps collapsed into a single `Ellipsis`
    ///
    /// Shows the first and last `on_ends` pages and `on_each_side` pages
    /// around `number`. A gap is only emitted when it would hide at least two
    /// pages; a single hidden page is shown instead of a placeholder. When the
    /// whole range fits, every page is listed.
    pub fn elided_page_range(&self, number: u64, on_each_side: u64, on_ends: u64) -> Vec<PageItem> {
        let num_pages = self.num_pages();
        let number = number.clamp(1, num_pages);

        if num_pages <= (on_each_side + on_ends) * 2 {
            return (1..=num_pages).map(PageItem::Page).collect();
        }

        let mut items = Vec::new();

        if number > 1 + on_each_side + on_ends + 1 {
            items.extend((1..=on_ends).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.extend((number - on_each_side..=number).map(PageItem::Page));
        } else {
            items.extend((1..=number).map(PageItem::Page));
        }

        if number + on_each_side + on_ends + 1 < num_pages {
            items.extend((number + 1..=number + on_each_side).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.extend((num_pages - on_ends + 1..=num_pages).map(PageItem::Page));
        } else {
            items.extend((number + 1..=num_pages).map(PageItem::Page));
        }

        items
    }

    /// Elided range rendered for templates, with the current page marked
    pub fn page_links(&self, number: u64) -> Vec<PageLink> {
        self.elided_page_range(number, ON_EACH_SIDE, ON_ENDS)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(n) => PageLink {
                    number: Some(n),
                    is_current: n == number,
                    is_gap: false,
                },
                PageItem::Ellipsis => PageLink {
                    number: None,
                    is_current: false,
                    is_gap: true,
                },
            })
            .collect()
    }
}
