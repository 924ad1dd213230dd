use i18nrs::yew::use_translation;
use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct LoadingProps {
    /// Translation key of the caption.
    #[prop_or(AttrValue::Static("loading.default"))]
    pub message_key: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4 text-base-content/70">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="text-sm font-medium animate-pulse">{i18n.t(&props.message_key)}</span>
        </div>
    }
}
