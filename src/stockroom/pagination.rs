//! # Pagination
//!
//! Arithmetic slicing of a view into fixed-size pages.
//!
//! The page count of an empty view is 0, but the effective page is always at
//! least 1, so an empty view yields page 1 with no rows. Requested pages past
//! the end clamp to the last page; pager controls only exist when there is more
//! than one page.

use serde::Serialize;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 7;

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if requested > total_pages {
        total_pages.max(1)
    } else {
        requested.max(1)
    }
}

/// One page of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective (clamped) page number, 1-based.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

pub fn paginate<T: Clone>(view: &[T], page_size: usize, requested: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = view.len();
    let pages = total_pages(total, size);
    let number = clamp_page(requested, pages);

    let start = (number - 1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    Page {
        items: view[start..end].to_vec(),
        number,
        total_pages: pages,
        total_items: total,
        page_size: size,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

/// The pager strip: previous, one button per page, next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerControls {
    pub previous: usize,
    pub pages: Vec<PageButton>,
    pub next: usize,
}

impl<T> Page<T> {
    pub fn controls(&self) -> Option<PagerControls> {
        if self.total_pages <= 1 {
            return None;
        }
        Some(PagerControls {
            previous: self.number.saturating_sub(1).max(1),
            pages: (1..=self.total_pages)
                .map(|n| PageButton {
                    number: n,
                    current: n == self.number,
                })
                .collect(),
            next: (self.number + 1).min(self.total_pages),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
