//! Selection counter and bulk delete button.

use crate::features::catalog::logic::selected_rows_label;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectedCountProps {
    pub selected_count: usize,
}

#[function_component(SelectedCount)]
pub(crate) fn selected_count(props: &SelectedCountProps) -> Html {
    html! {
        <div class="selected-count">
            <p>{selected_rows_label(props.selected_count)}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    #[prop_or_default]
    pub on_delete_selected: Callback<MouseEvent>,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    html! {
        <button class="delete-selected" onclick={props.on_delete_selected.clone()}>
            {"Delete Selected"}
        </button>
    }
}
