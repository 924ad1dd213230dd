use yew::{Html, function_component, html};
use yew_router::prelude::*;

use crate::components::toaster::Toaster;
use crate::routes::{MainRoute, switch};

/// Router shell. Each gated page runs its own admin check on mount, so the
/// shell holds no session state of its own.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
            <Toaster />
        </BrowserRouter>
    }
}
