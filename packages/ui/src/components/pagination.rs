use dioxus::prelude::*;

/// Rows per page on every list view.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` rows; never zero.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// The slice shown on 1-based `page`. Pages past the end clamp to the last.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let last = page_count(items.len(), per_page);
    let page = page.clamp(1, last);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    &items[start.min(items.len())..end]
}

#[component]
pub fn Pagination(page: usize, total: usize, on_change: EventHandler<usize>) -> Element {
    let pages = page_count(total, PAGE_SIZE);
    let page = page.clamp(1, pages);

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "btn btn-ghost",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Anterior"
            }
            span { class: "pagination-status", "Página {page} de {pages} · {total} registros" }
            button {
                class: "btn btn-ghost",
                disabled: page >= pages,
                onclick: move |_| on_change.call(page + 1),
                "Siguiente"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
        assert_eq!(paginate(&items, 9, 10), &[21, 22, 23]);
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
        assert!(paginate(&Vec::<u32>::new(), 1, 10).is_empty());
    }
}
