//! List manager for the product table, kept free of DOM types so it runs under native tests.
//!
//! # Design
//! - The catalog is the working set; deletes remove from it, so a deleted product stays
//!   gone when the search changes or is cleared.
//! - The view is always re-derived from the catalog and the debounced term.
//! - The page index is clamped whenever the view can shrink; `set_page` is taken as given.
//! - Timers are [`TimerSlot`]s advanced by [`ListManager::tick`] with caller-supplied time.

use std::collections::HashSet;

use shopfront_api_models::Product;

use crate::features::catalog::logic::{
    DEBOUNCE_MS, ITEMS_PER_PAGE, TOAST_MS, clamp_page, derive_view, matches_term, page_count,
    page_window,
};
use crate::features::catalog::timers::TimerSlot;

/// Toast text after a single delete.
pub const PRODUCT_DELETED: &str = "Product deleted successfully.";
/// Toast text after a bulk delete.
pub const SELECTION_DELETED: &str = "Selected products deleted successfully.";

/// Visible confirmation banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Message shown to the user.
    pub message: &'static str,
}

/// Search, selection, paging, and delete state for the product table.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListManager {
    catalog: Vec<Product>,
    search_input: String,
    debounced_term: String,
    view: Vec<Product>,
    selection: HashSet<u64>,
    current_page: usize,
    toast: Option<Toast>,
    debounce: TimerSlot,
    toast_timer: TimerSlot,
}

impl ListManager {
    /// Install the fetched catalog and derive the view from it.
    pub fn load(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
        self.recompute_view();
    }

    /// Record raw search input and (re)arm the debounce timer.
    pub fn set_search_input(&mut self, term: impl Into<String>, now_ms: u64) {
        self.search_input = term.into();
        self.debounce.arm(now_ms, DEBOUNCE_MS);
    }

    /// Fire any timers due at `now_ms`. Returns `true` when state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        if self.debounce.fire_if_due(now_ms) {
            self.apply_debounced();
            changed = true;
        }
        if self.toast_timer.fire_if_due(now_ms) {
            self.toast = None;
            changed = true;
        }
        changed
    }

    /// Re-derive the view from the catalog and the debounced term.
    pub fn recompute_view(&mut self) {
        self.view = derive_view(&self.catalog, &self.debounced_term);
        self.current_page = clamp_page(self.current_page, self.page_count());
    }

    /// Flip selection of `id`.
    pub fn toggle_row(&mut self, id: u64) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Delete the first product in the view with `id`, removing it from the catalog.
    ///
    /// Returns `false` (and shows nothing) when no visible row carries `id`.
    pub fn delete_one(&mut self, id: u64, now_ms: u64) -> bool {
        let term = &self.debounced_term;
        let Some(index) = self
            .catalog
            .iter()
            .position(|product| product.id == id && matches_term(product, term))
        else {
            return false;
        };
        self.catalog.remove(index);
        self.selection.remove(&id);
        self.recompute_view();
        self.show_toast(PRODUCT_DELETED, now_ms);
        true
    }

    /// Delete every selected product and clear the selection.
    pub fn delete_selected(&mut self, now_ms: u64) {
        let selection = &self.selection;
        self.catalog
            .retain(|product| !selection.contains(&product.id));
        self.selection.clear();
        self.recompute_view();
        self.show_toast(SELECTION_DELETED, now_ms);
    }

    /// Jump to page `index`.
    pub const fn set_page(&mut self, index: usize) {
        self.current_page = index;
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible_items(&self) -> &[Product] {
        page_window(&self.view, self.current_page, ITEMS_PER_PAGE)
    }

    /// Number of pages in the current view.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        page_count(self.view.len(), ITEMS_PER_PAGE)
    }

    /// Zero-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of selected rows.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    /// Raw search text as typed.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Search text currently applied to the view.
    #[must_use]
    pub fn debounced_term(&self) -> &str {
        &self.debounced_term
    }

    /// Filtered rows across all pages.
    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Visible toast, if any.
    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Earliest pending timer due time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.debounce.due_ms(), self.toast_timer.due_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn apply_debounced(&mut self) {
        if self.debounced_term != self.search_input {
            self.debounced_term.clone_from(&self.search_input);
            if !self.debounced_term.is_empty() {
                self.current_page = 0;
            }
        }
        self.recompute_view();
    }

    fn show_toast(&mut self, message: &'static str, now_ms: u64) {
        self.toast = Some(Toast { message });
        self.toast_timer.arm(now_ms, TOAST_MS);
    }
}
