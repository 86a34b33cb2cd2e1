//! Root component: wires the store, the one-time catalog fetch, and timer scheduling.
//!
//! # Design
//! - Fetch the catalog once on mount; a failure is logged to the console and the table stays empty.
//! - Schedule a single `gloo` timeout for the list manager's earliest deadline. Replacing the
//!   handle drops (and cancels) the previous timeout.

use crate::components::bulk_action_bar::{BulkActionBar, SelectedCount};
use crate::components::pagination::Pagination;
use crate::components::product_table::ProductTable;
use crate::components::search_input::SearchInput;
use crate::components::toast::ToastBanner;
use crate::core::store::{CatalogStore, select_page_rows};
use crate::features::catalog::api::{DEFAULT_API_BASE_URL, fetch_products};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ShopfrontApp)]
pub(crate) fn shopfront_app() -> Html {
    let dispatch = Dispatch::<CatalogStore>::new();
    let timer = use_mut_ref(|| None as Option<Timeout>);

    let rows = use_selector(select_page_rows);
    let search_input = use_selector(|store: &CatalogStore| store.list.search_input().to_string());
    let selected_count = use_selector(|store: &CatalogStore| store.list.selected_count());
    let current_page = use_selector(|store: &CatalogStore| store.list.current_page());
    let page_count = use_selector(|store: &CatalogStore| store.list.page_count());
    let toast = use_selector(|store: &CatalogStore| store.list.toast().map(|toast| toast.message));
    let next_deadline = use_selector(|store: &CatalogStore| store.list.next_deadline());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    match fetch_products(DEFAULT_API_BASE_URL).await {
                        Ok(products) => {
                            dispatch.reduce_mut(|store| {
                                store.list.load(products);
                            });
                        }
                        Err(err) => {
                            gloo::console::error!("Error fetching products:", err.to_string());
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let dispatch = dispatch.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |deadline: &std::rc::Rc<Option<u64>>| {
                let next = (**deadline).map(|due_ms| {
                    let delay = u32::try_from(due_ms.saturating_sub(now_ms())).unwrap_or(u32::MAX);
                    Timeout::new(delay, move || {
                        dispatch.reduce_mut(|store| {
                            store.list.tick(now_ms().max(due_ms));
                        });
                    })
                });
                *timer.borrow_mut() = next;
                || ()
            },
            next_deadline,
        );
    }

    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| {
                store.list.set_search_input(value, now_ms());
            });
        })
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| store.list.toggle_row(id));
        })
    };
    let on_delete = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| {
                store.list.delete_one(id, now_ms());
            });
        })
    };
    let on_delete_selected = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store.list.delete_selected(now_ms()));
        })
    };
    let on_page = {
        let dispatch = dispatch.clone();
        Callback::from(move |index: usize| {
            dispatch.reduce_mut(|store| store.list.set_page(index));
        })
    };

    html! {
        <div class="product-table-container">
            <h1>{"Product Listing"}</h1>
            <SearchInput value={AttrValue::from((*search_input).clone())} {on_input} />
            <SelectedCount selected_count={*selected_count} />
            <ProductTable rows={(*rows).clone()} {on_toggle} {on_delete} />
            <BulkActionBar {on_delete_selected} />
            <Pagination current={*current_page} page_count={*page_count} on_select={on_page} />
            <ToastBanner message={(*toast).map(AttrValue::Static)} />
        </div>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Mount the app on `#root`, or on the body when no such element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ShopfrontApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShopfrontApp>::new().render();
    }
}
