use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

use crate::containers::gated::Gated;
use crate::pages::{
    AccountPage, DashboardPage, LoginPage, NotFoundPage, PaymentsPage, ProfileDetailPage,
    SettingsPage, UserDetailPage,
};

/// Every page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/auth/login")]
    Login,
    #[at("/payments")]
    Payments,
    #[at("/user/:id")]
    UserDetail { id: String },
    #[at("/user/:id/profile/:profile_id")]
    ProfileDetail { id: String, profile_id: String },
    #[at("/profile")]
    Account,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes listed in the sidebar, in display order.
    pub fn sidebar() -> Vec<Self> {
        Self::iter().filter(Self::in_sidebar).collect()
    }

    const fn in_sidebar(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Payments | Self::Account | Self::Settings
        )
    }

    /// Translation key prefix, e.g. `routes.payments`.
    pub const fn i18n_key(&self) -> &'static str {
        match self {
            Self::Dashboard => "routes.dashboard",
            Self::Login => "routes.login",
            Self::Payments => "routes.payments",
            Self::UserDetail { .. } => "routes.user_detail",
            Self::ProfileDetail { .. } => "routes.profile_detail",
            Self::Account => "routes.account",
            Self::Settings => "routes.settings",
            Self::NotFound => "routes.not_found",
        }
    }

    pub const fn icon(&self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineUsers,
            Self::Payments => IconId::HeroiconsOutlineCreditCard,
            Self::Account | Self::UserDetail { .. } | Self::ProfileDetail { .. } => {
                IconId::HeroiconsOutlineUserCircle
            }
            Self::Settings => IconId::HeroiconsOutlineCog6Tooth,
            Self::Login => IconId::HeroiconsOutlineArrowLeftOnRectangle,
            Self::NotFound => IconId::HeroiconsOutlineExclamationTriangle,
        }
    }

    /// Sidebar entry highlighted while this route is open.
    pub const fn section(&self) -> Self {
        match self {
            Self::UserDetail { .. } | Self::ProfileDetail { .. } => Self::Dashboard,
            Self::Payments => Self::Payments,
            Self::Account => Self::Account,
            Self::Settings => Self::Settings,
            Self::Login => Self::Login,
            Self::NotFound => Self::NotFound,
            Self::Dashboard => Self::Dashboard,
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    let key = route.to_path();
    debug!(path = %key, "switching route");
    match route.clone() {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Dashboard => html! {
            <Gated key={key} {route}><DashboardPage /></Gated>
        },
        MainRoute::Payments => html! {
            <Gated key={key} {route}><PaymentsPage /></Gated>
        },
        MainRoute::UserDetail { id } => html! {
            <Gated key={key} {route}><UserDetailPage user_id={id} /></Gated>
        },
        MainRoute::ProfileDetail { id, profile_id } => html! {
            <Gated key={key} {route}><ProfileDetailPage user_id={id} {profile_id} /></Gated>
        },
        MainRoute::Account => html! {
            <Gated key={key} {route}><AccountPage /></Gated>
        },
        MainRoute::Settings => html! {
            <Gated key={key} {route}><SettingsPage /></Gated>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}
