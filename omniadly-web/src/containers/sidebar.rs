use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::nav_item::NavItem;
use crate::hooks::use_sign_out;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct SidebarProps {
    pub current_route: MainRoute,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let (i18n, ..) = use_translation();
    let sign_out = use_sign_out();
    let on_logout = Callback::from(move |_: MouseEvent| sign_out.emit(()));

    html! {
        <aside class="flex flex-col min-h-full w-64 bg-base-200 border-r border-base-300">
            <div class="px-6 py-5 text-xl font-bold tracking-tight">
                {i18n.t("app.title")}
            </div>
            <ul class="menu flex-1 w-full gap-1 px-3">
                { for MainRoute::sidebar().into_iter().map(|route| html! {
                    <NavItem {route} current_route={props.current_route.clone()} />
                }) }
            </ul>
            <div class="p-3 border-t border-base-300">
                <button class="btn btn-ghost w-full justify-start gap-3" onclick={on_logout}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeftOnRectangle} class="w-5 h-5" />
                    {i18n.t("header.logout")}
                </button>
            </div>
        </aside>
    }
}
