use yew::{Children, Html, Properties, function_component, html};

use crate::components::Loading;
use crate::containers::layout::Layout;
use crate::hooks::use_admin_auth;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct GatedProps {
    pub route: MainRoute,
    pub children: Children,
}

/// Renders its children inside the dashboard layout once the admin check
/// has passed. Nothing protected is rendered before that.
#[function_component(Gated)]
pub fn gated(props: &GatedProps) -> Html {
    let gate = use_admin_auth();

    if gate.is_loading {
        return html! { <Loading message_key="loading.verifying" /> };
    }
    if !gate.is_admin {
        return html! {};
    }

    html! {
        <Layout current_route={props.route.clone()}>
            {props.children.clone()}
        </Layout>
    }
}
