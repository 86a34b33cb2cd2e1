//! Labelled search box.
//!
//! # Design
//! - Emit every keystroke; debouncing lives in the list manager so it is testable.
//! - The displayed value comes from the store, keeping typing feedback immediate.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub on_input: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    html! {
        <div class="search-bar">
            <label for="search">{"Search by Name:"}</label>
            <input
                id="search"
                type="text"
                placeholder="Search products..."
                value={props.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}
