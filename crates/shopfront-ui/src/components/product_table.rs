//! Product table with per-row selection and delete.
//!
//! # Design
//! - Row click and checkbox both toggle; the checkbox stops propagation so one click toggles once.
//! - The Delete button never toggles its row.

use crate::features::catalog::logic::format_price;
use shopfront_api_models::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductTableProps {
    pub rows: Vec<(Product, bool)>,
    #[prop_or_default]
    pub on_toggle: Callback<u64>,
    #[prop_or_default]
    pub on_delete: Callback<u64>,
}

#[function_component(ProductTable)]
pub(crate) fn product_table(props: &ProductTableProps) -> Html {
    html! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>{"Select"}</th>
                    <th>{"Product Name"}</th>
                    <th>{"Price"}</th>
                    <th>{"Description"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|(product, selected)| {
                    render_row(product, *selected, &props.on_toggle, &props.on_delete)
                }) }
            </tbody>
        </table>
    }
}

fn render_row(
    product: &Product,
    selected: bool,
    on_toggle: &Callback<u64>,
    on_delete: &Callback<u64>,
) -> Html {
    let id = product.id;
    let on_row_click = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };
    let on_check = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle.emit(id);
        })
    };
    let on_delete_click = {
        let on_delete = on_delete.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_delete.emit(id);
        })
    };

    html! {
        <tr class={classes!(selected.then_some("selected-row"))} onclick={on_row_click}>
            <td>
                <input type="checkbox" checked={selected} onclick={on_check} />
            </td>
            <td>{product.title.clone()}</td>
            <td>{format_price(product.price)}</td>
            <td>{product.description.clone()}</td>
            <td>
                <button onclick={on_delete_click}>{"Delete"}</button>
            </td>
        </tr>
    }
}
