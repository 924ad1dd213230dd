use crate::containers::header::{DRAWER_ID, Header};
use crate::containers::sidebar::Sidebar;
use crate::routes::MainRoute;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
}

/// Sidebar drawer, header and page content of every signed-in view.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header current_route={props.current_route.clone()} />
                <main class="flex-grow p-4 lg:p-8">
                    <div class="max-w-7xl mx-auto flex flex-col gap-8 pb-10">
                        {props.children.clone()}
                    </div>
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content/70">
                    <p>{"© 2025 OmniAdly · Admin"}</p>
                </footer>
            </div>
            <div class="drawer-side z-40">
                <label for={DRAWER_ID} aria-label="close sidebar" class="drawer-overlay"></label>
                <Sidebar current_route={props.current_route.clone()} />
            </div>
        </div>
    }
}
