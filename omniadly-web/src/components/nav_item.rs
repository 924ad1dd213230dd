use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub route: MainRoute,
    pub current_route: MainRoute,
}

/// Sidebar link, highlighted while its section is open.
#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let title = i18n.t(&format!("{}.title", props.route.i18n_key()));
    let active_class = if props.current_route.section() == props.route {
        "menu-active"
    } else {
        ""
    };

    html! {
        <li>
            <Link<MainRoute> to={props.route.clone()} classes={classes!("gap-3", active_class)}>
                <Icon icon_id={props.route.icon()} class="w-5 h-5" />
                {title}
            </Link<MainRoute>>
        </li>
    }
}
