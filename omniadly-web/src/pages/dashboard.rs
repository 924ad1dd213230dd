use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::format::{format_date, initial, short_id};
use shared::models::User;
use shared::table::CellValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::{AdminClient, or_empty};
use crate::components::{Column, DataTable, StatCard};
use crate::routes::MainRoute;

/// Headline numbers over the loaded user directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_users: usize,
    pub users_with_social: usize,
    pub social_accounts: u64,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            total_users: users.len(),
            users_with_social: users
                .iter()
                .filter(|user| user.social_accounts_count > 0)
                .count(),
            social_accounts: users
                .iter()
                .map(|user| u64::from(user.social_accounts_count))
                .sum(),
        }
    }
}

fn user_columns(
    i18n_t: &dyn Fn(&str) -> String,
    navigator: Option<Navigator>,
) -> Vec<Column<User>> {
    let accounts_label = i18n_t("dashboard.accounts");
    let manage_label = i18n_t("dashboard.manage");

    vec![
        Column::key("email", i18n_t("dashboard.columns.user")).cell(|user: &User| {
            html! {
                <div class="flex items-center gap-3 py-1">
                    <div class="avatar placeholder">
                        <div class="bg-primary/10 text-primary w-8 rounded-full text-xs font-bold">
                            <span>{initial(&user.email)}</span>
                        </div>
                    </div>
                    <div class="flex flex-col">
                        <span class="font-medium">{&user.email}</span>
                        <span class="text-xs text-base-content/60">{format!("ID: {}", short_id(&user.id))}</span>
                    </div>
                </div>
            }
        }),
        Column::computed(
            "socialAccountsCount",
            i18n_t("dashboard.columns.social_accounts"),
            |user: &User| CellValue::from(user.social_accounts_count),
        )
        .cell(move |user: &User| {
            html! {
                <span class="badge badge-ghost badge-sm font-semibold">
                    {format!("{} {accounts_label}", user.social_accounts_count)}
                </span>
            }
        }),
        Column::key("createdAt", i18n_t("dashboard.columns.joined")).cell(|user: &User| {
            html! { <span class="text-sm text-base-content/70">{format_date(&user.created_at)}</span> }
        }),
        Column::display("actions", i18n_t("dashboard.columns.actions"), move |user: &User| {
            let navigator = navigator.clone();
            let id = user.id.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&MainRoute::UserDetail { id: id.clone() });
                }
            });
            html! {
                <div class="text-right">
                    <button class="btn btn-ghost btn-sm gap-1.5" {onclick}>
                        {manage_label.clone()}
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-3.5 h-3.5" />
                    </button>
                </div>
            }
        }),
    ]
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();
    let users = use_state(|| Rc::new(Vec::<User>::new()));
    let loading = use_state(|| true);

    {
        let users = users.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = or_empty(AdminClient::shared().users().await, "users");
                users.set(Rc::new(loaded));
                loading.set(false);
            });
            || ()
        });
    }

    let columns = Rc::new(user_columns(&|key| i18n.t(key), navigator));
    let stats = UserStats::from_users(&users);

    html! {
        <>
            <div class="flex flex-col gap-1">
                <h1 class="text-3xl font-bold tracking-tight">{i18n.t("dashboard.title")}</h1>
                <p class="text-base-content/70 font-light">{i18n.t("dashboard.subtitle")}</p>
            </div>

            <div class="stats stats-vertical md:stats-horizontal shadow-sm w-full">
                <StatCard
                    title={i18n.t("dashboard.stats.total_users")}
                    value={stats.total_users.to_string()}
                    icon={IconId::HeroiconsOutlineUsers}
                />
                <StatCard
                    title={i18n.t("dashboard.stats.connected_users")}
                    value={stats.users_with_social.to_string()}
                    icon={IconId::HeroiconsOutlineLink}
                />
                <StatCard
                    title={i18n.t("dashboard.stats.social_accounts")}
                    value={stats.social_accounts.to_string()}
                    icon={IconId::HeroiconsOutlineUserCircle}
                />
            </div>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title text-xl">{i18n.t("dashboard.directory.title")}</h2>
                    <p class="text-sm text-base-content/70">{i18n.t("dashboard.directory.description")}</p>
                    <DataTable<User>
                        {columns}
                        data={(*users).clone()}
                        loading={*loading}
                        page_size={10}
                        empty_message={i18n.t("dashboard.directory.empty")}
                    />
                </div>
            </div>
        </>
    }
}
