use shared::auth::NoticeLevel;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::*;

use crate::models::toasts::ToastState;

const fn level_icon(level: NoticeLevel) -> IconId {
    match level {
        NoticeLevel::Success => IconId::HeroiconsOutlineCheckCircle,
        NoticeLevel::Info => IconId::HeroiconsOutlineInformationCircle,
        NoticeLevel::Warning => IconId::HeroiconsOutlineExclamationTriangle,
        NoticeLevel::Error => IconId::HeroiconsOutlineXCircle,
    }
}

/// Stack of live toasts, newest at the bottom.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let (state, dispatch) = use_store::<ToastState>();

    html! {
        <div class="toast toast-end toast-bottom z-50">
            { for state.toasts.iter().map(|toast| {
                let id = toast.id;
                let dispatch = dispatch.clone();
                let on_close = Callback::from(move |_: MouseEvent| {
                    dispatch.reduce_mut(|state| state.dismiss(id));
                });
                html! {
                    <div key={id.to_string()} role="alert" class={classes!("alert", toast.alert_class())}>
                        <Icon icon_id={level_icon(toast.level)} class="w-5 h-5" />
                        <span>{&toast.message}</span>
                        <button class="btn btn-ghost btn-xs btn-circle" onclick={on_close}>
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
