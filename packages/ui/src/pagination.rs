//! Previous / next controls for the story list.

use api::PageMeta;
use dioxus::prelude::*;

/// Pagination state derived from a page's metadata.
///
/// The API reports pages 1-based but may send `0` for "first page", so the
/// current page is `max(page, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub count: u32,
    pub limit: u32,
}

impl Pager {
    pub fn from_meta(meta: PageMeta) -> Self {
        Self {
            page: meta.page,
            count: meta.count,
            limit: meta.limit,
        }
    }

    pub fn current(&self) -> u32 {
        self.page.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current() > 1
    }

    /// More entries exist beyond this page.
    pub fn has_next(&self) -> bool {
        self.limit > 0 && u64::from(self.count) > u64::from(self.current()) * u64::from(self.limit)
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current() - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current() + 1)
    }

    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.count.div_ceil(self.limit).max(1)
    }
}

/// Previous / next buttons; disabled at either end.
#[component]
pub fn Pagination(pager: Pager, on_page: EventHandler<u32>) -> Element {
    let previous = pager.previous();
    let next = pager.next();

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "button button--outline pagination__previous",
                disabled: previous.is_none(),
                onclick: move |_| {
                    if let Some(page) = previous {
                        on_page.call(page);
                    }
                },
                "Previous"
            }
            span {
                class: "pagination__status",
                "Page {pager.current()} of {pager.total_pages()}"
            }
            button {
                class: "button button--outline pagination__next",
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(page) = next {
                        on_page.call(page);
                    }
                },
                "Next"
            }
        }
    }
}
