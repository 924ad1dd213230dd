use i18nrs::yew::use_translation;
use shared::format::initial;
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;

/// The signed-in administrator's own account.
#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let (i18n, _) = use_translation();
    let user = use_selector(|state: &AppState| state.user.clone());

    let Some(user) = user.as_ref() else {
        return html! {
            <p class="text-base-content/70">{i18n.t("account.unavailable")}</p>
        };
    };

    html! {
        <>
            <h1 class="text-3xl font-bold">{i18n.t("account.title")}</h1>
            <div class="card bg-base-200 shadow-sm max-w-xl">
                <div class="card-body items-center text-center gap-4">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content w-20 rounded-full">
                            <span class="text-3xl">{initial(&user.email)}</span>
                        </div>
                    </div>
                    <div>
                        <h2 class="text-xl font-semibold">{user.display_name().to_string()}</h2>
                        <p class="text-base-content/70">{user.email.clone()}</p>
                    </div>
                    <div class="badge badge-primary">{user.role.to_string()}</div>
                </div>
            </div>
        </>
    }
}
