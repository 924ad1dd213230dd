use crate::components::{
    language_selector::LanguageSelector, theme_switcher::ThemeSwitcher,
    user_dropdown::UserDropdown,
};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Id of the drawer toggle shared by the header button and the layout.
pub const DRAWER_ID: &str = "admin-drawer";

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderProps {
    pub current_route: MainRoute,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let title = i18n.t(&format!("{}.title", props.current_route.i18n_key()));

    html! {
        <nav class="navbar sticky top-0 z-30 bg-base-100/95 backdrop-blur border-b border-base-300 px-4">
            <label for={DRAWER_ID} class="btn btn-ghost btn-square lg:hidden" aria-label={i18n.t("header.menu")}>
                <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
            </label>
            <h1 class="flex-1 text-lg font-semibold">{title}</h1>
            <div class="flex items-center gap-1">
                <LanguageSelector />
                <ThemeSwitcher />
                <UserDropdown />
            </div>
        </nav>
    }
}
