use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pages shown on each side of the current one in [`PageLinks`].
pub const DEFAULT_LINK_WINDOW: usize = 2;

// ---------------------------------------------------------------------------
// Page – one slice of the filtered set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective (clamped) 1-based page number.
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// Never below 1, even for an empty set.
    pub total_pages: usize,
}

/// Number of pages needed for `total_items`, at least one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into page `page_number`.
///
/// The requested page is clamped into `[1, total_pages]` before slicing, so
/// zero, negative and too-large requests all land on a real page. A
/// `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page_number: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let page_number = usize::try_from(page_number.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        page_number,
        page_size,
        total_items,
        total_pages,
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    /// Navigation around this page, `window` pages to each side.
    pub fn links(&self, window: usize) -> PageLinks {
        PageLinks::new(self.page_number, self.total_pages, window)
    }
}

// ---------------------------------------------------------------------------
// PageLinks – previous / numbered / next navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub previous: Option<usize>,
    pub current: usize,
    pub pages: Vec<usize>,
    pub next: Option<usize>,
}

impl PageLinks {
    /// Empty when there is only one page.
    pub fn new(current: usize, total_pages: usize, window: usize) -> Self {
        if total_pages <= 1 {
            return PageLinks {
                current: 1,
                ..Default::default()
            };
        }
        let current = current.clamp(1, total_pages);
        let first = current.saturating_sub(window).max(1);
        let last = current.saturating_add(window).min(total_pages);
        PageLinks {
            previous: (current > 1).then(|| current - 1),
            current,
            pages: (first..=last).collect(),
            next: (current < total_pages).then(|| current + 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
