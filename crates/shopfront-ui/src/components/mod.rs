//! Yew components for the product table page.

pub(crate) mod bulk_action_bar;
pub(crate) mod pagination;
pub(crate) mod product_table;
pub(crate) mod search_input;
pub(crate) mod toast;
