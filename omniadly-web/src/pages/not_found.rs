use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-base-100 text-center">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-16 h-16 text-warning" />
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{i18n.t("not_found.description")}</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                {i18n.t("not_found.back")}
            </Link<MainRoute>>
        </div>
    }
}
