//! Pure list helpers: search filtering, paging, and display formatting.

use shopfront_api_models::Product;

/// Rows shown per page.
pub const ITEMS_PER_PAGE: usize = 10;
/// Quiet period before typed search input is applied.
pub const DEBOUNCE_MS: u64 = 300;
/// How long a toast stays visible.
pub const TOAST_MS: u64 = 3_000;

const PAGE_RANGE: usize = 2;
const PAGE_MARGIN: usize = 3;

/// Whether `product` passes the search `term`: its title contains the term,
/// ignoring case. An empty term matches everything.
#[must_use]
pub fn matches_term(product: &Product, term: &str) -> bool {
    term.is_empty() || product.title.to_lowercase().contains(&term.to_lowercase())
}

/// Filter `catalog` to products matching `term`. Order is preserved.
#[must_use]
pub fn derive_view(catalog: &[Product], term: &str) -> Vec<Product> {
    if term.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|product| matches_term(product, term))
        .cloned()
        .collect()
}

/// Number of pages needed for `len` rows.
#[must_use]
pub const fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Rows of `view` on page `page`; empty when the page is out of range.
#[must_use]
pub fn page_window<T>(view: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page);
    if start >= view.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(view.len());
    &view[start..end]
}

/// Clamp `page` into `[0, max(pages - 1, 0)]`.
#[must_use]
pub const fn clamp_page(page: usize, pages: usize) -> usize {
    let last = pages.saturating_sub(1);
    if page > last { last } else { page }
}

/// Price cell text.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Selection counter text.
#[must_use]
pub fn selected_rows_label(count: usize) -> String {
    format!("Total Selected Rows: {count}")
}

/// One slot in the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(usize),
    /// Collapsed run of pages.
    Break,
}

/// Page indicators around `selected`: the first and last few pages, a small
/// window around the current one, and a break marker for each gap.
#[must_use]
pub fn page_items(selected: usize, pages: usize) -> Vec<PageItem> {
    if pages <= PAGE_RANGE {
        return (0..pages).map(PageItem::Page).collect();
    }

    let half = PAGE_RANGE / 2;
    let (left, right) = if selected + half > pages {
        let right = pages.saturating_sub(selected);
        (PAGE_RANGE.saturating_sub(right), right)
    } else if selected < half {
        (selected, PAGE_RANGE - selected)
    } else {
        (half, PAGE_RANGE - half)
    };
    let reach = if selected == 0 {
        right.saturating_sub(1)
    } else {
        right
    };

    let mut items = Vec::new();
    for index in 0..pages {
        let page = index + 1;
        let in_margin = page <= PAGE_MARGIN || page > pages.saturating_sub(PAGE_MARGIN);
        let in_window = index + left >= selected && index <= selected + reach;
        if in_margin || in_window {
            items.push(PageItem::Page(index));
        } else if items.last() != Some(&PageItem::Break) {
            items.push(PageItem::Break);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 1.0,
            image: String::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_term_keeps_catalog() {
        let catalog = vec![product(1, "Red Lipstick"), product(2, "Blue Pen")];
        assert_eq!(derive_view(&catalog, ""), catalog);
    }

    #[test]
    fn search_is_case_insensitive_on_title_only() {
        let mut described = product(3, "Notebook");
        described.description = "red cover".to_string();
        let catalog = vec![
            product(1, "Red Lipstick"),
            product(2, "Blue Pen"),
            described,
            product(4, "Infrared Lamp"),
        ];
        assert_eq!(ids(&derive_view(&catalog, "RED")), vec![1, 4]);
        assert!(derive_view(&catalog, "zzz").is_empty());
    }

    #[test]
    fn search_keeps_duplicates_and_order() {
        let catalog = vec![product(2, "Pen"), product(1, "Pencil"), product(2, "Pen")];
        assert_eq!(ids(&derive_view(&catalog, "pen")), vec![2, 1, 2]);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, ITEMS_PER_PAGE), 0);
        assert_eq!(page_count(10, ITEMS_PER_PAGE), 1);
        assert_eq!(page_count(11, ITEMS_PER_PAGE), 2);
        assert_eq!(page_count(25, ITEMS_PER_PAGE), 3);
        assert_eq!(page_count(30, ITEMS_PER_PAGE), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn page_window_slices_and_tolerates_out_of_range() {
        let view: Vec<u32> = (0..25).collect();
        assert_eq!(page_window(&view, 0, 10), &view[0..10]);
        assert_eq!(page_window(&view, 2, 10), &view[20..25]);
        assert!(page_window(&view, 3, 10).is_empty());
        assert!(page_window(&view, usize::MAX, 10).is_empty());
        assert!(page_window::<u32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn clamp_page_bounds_index() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }

    #[test]
    fn price_uses_shortest_representation() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(10.0), "$10");
    }

    #[test]
    fn selected_rows_label_counts() {
        assert_eq!(selected_rows_label(0), "Total Selected Rows: 0");
        assert_eq!(selected_rows_label(12), "Total Selected Rows: 12");
    }

    #[test]
    fn few_pages_are_all_listed() {
        assert_eq!(
            page_items(1, 3),
            vec![PageItem::Page(0), PageItem::Page(1), PageItem::Page(2)]
        );
        assert!(page_items(0, 0).is_empty());
    }

    #[test]
    fn many_pages_collapse_gaps() {
        use PageItem::{Break, Page};
        assert_eq!(
            page_items(0, 10),
            vec![Page(0), Page(1), Page(2), Break, Page(7), Page(8), Page(9)]
        );
        assert_eq!(
            page_items(5, 12),
            vec![
                Page(0),
                Page(1),
                Page(2),
                Break,
                Page(4),
                Page(5),
                Page(6),
                Break,
                Page(9),
                Page(10),
                Page(11)
            ]
        );
    }
}
