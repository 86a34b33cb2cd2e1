//! App-wide yewdux store.
//!
//! # Design
//! - One store owns the list manager; components mutate it only through dispatch.
//! - Selectors read narrow projections so rows re-render only when they change.

use shopfront_api_models::Product;
use yewdux::store::Store;

use crate::features::catalog::state::ListManager;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Default, Store)]
pub struct CatalogStore {
    /// Product table state.
    pub list: ListManager,
}

/// Rows and selection flags for the current page.
#[must_use]
pub fn select_page_rows(store: &CatalogStore) -> Vec<(Product, bool)> {
    store
        .list
        .visible_items()
        .iter()
        .map(|product| (product.clone(), store.list.is_selected(product.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_rows_carry_selection() {
        let mut store = CatalogStore::default();
        store.list.load(vec![
            Product {
                id: 1,
                title: "Lamp".into(),
                description: String::new(),
                price: 2.0,
                image: String::new(),
            },
            Product {
                id: 2,
                title: "Desk".into(),
                description: String::new(),
                price: 3.0,
                image: String::new(),
            },
        ]);
        store.list.toggle_row(2);
        let rows = select_page_rows(&store);
        let flags: Vec<(u64, bool)> = rows.iter().map(|(p, s)| (p.id, *s)).collect();
        assert_eq!(flags, vec![(1, false), (2, true)]);
    }
}
