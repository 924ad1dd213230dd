use i18nrs::yew::use_translation;
use shared::format::initial;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::{hooks::use_sign_out, models::app_state::AppState, routes::MainRoute};

/// Avatar menu with the signed-in admin's identity and logout.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let sign_out = use_sign_out();
    let user_state = use_selector(|state: &AppState| state.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let account_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Account);
            }
        });
        html! {
            <li>
                <a {onclick}>
                    <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-4 h-4" />
                    {i18n.t("header.account")}
                </a>
            </li>
        }
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            sign_out.emit(());
        });
        html! {
            <li>
                <a {onclick}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeftOnRectangle} class="w-4 h-4" />
                    {i18n.t("header.logout")}
                </a>
            </li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                <div class="bg-primary text-primary-content w-9 rounded-full">
                    <span>{initial(&user.email)}</span>
                </div>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{user.display_name()}</div>
                    <div class="text-xs text-base-content/70">{&user.email}</div>
                </li>
                <div class="divider my-0"></div>
                {account_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
