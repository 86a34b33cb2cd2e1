use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(ToastBanner)]
pub(crate) fn toast_banner(props: &ToastBannerProps) -> Html {
    props.message.as_ref().map_or_else(Html::default, |message| {
        html! {
            <div class="toast" role="status" aria-live="polite">{message.clone()}</div>
        }
    })
}
