//! Previous/Next pagination with page indicators.

use crate::features::catalog::logic::{PageItem, page_items};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub current: usize,
    pub page_count: usize,
    #[prop_or_default]
    pub on_select: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let current = props.current;
    let last = props.page_count.saturating_sub(1);
    let has_previous = current > 0 && props.page_count > 0;
    let has_next = current < last;

    let go_to = |index: usize| {
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(index);
        })
    };
    let on_previous = if has_previous {
        go_to(current.min(props.page_count) - 1)
    } else {
        Callback::noop()
    };
    let on_next = if has_next {
        go_to(current + 1)
    } else {
        Callback::noop()
    };

    html! {
        <ul class="pagination" role="navigation" aria-label="Pagination">
            <li class={classes!("previous", (!has_previous).then_some("disabled"))}>
                <a role="button" tabindex="0" onclick={on_previous}>{"Previous"}</a>
            </li>
            { for page_items(current, props.page_count).into_iter().map(|item| match item {
                PageItem::Page(index) => html! {
                    <li class={classes!((index == current).then_some("active"))}>
                        <a role="button" tabindex="0" onclick={go_to(index)}>{(index + 1).to_string()}</a>
                    </li>
                },
                PageItem::Break => html! {
                    <li class="break"><a role="button">{"..."}</a></li>
                },
            }) }
            <li class={classes!("next", (!has_next).then_some("disabled"))}>
                <a role="button" tabindex="0" onclick={on_next}>{"Next"}</a>
            </li>
        </ul>
    }
}
