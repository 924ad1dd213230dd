use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::auth::{NoticeLevel, Notifier};
use shared::format::{PLACEHOLDER, format_date};
use shared::models::{Brand, Profile, SocialAccount, Subscription, Team};
use shared::table::CellValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::{AdminClient, or_empty};
use crate::components::{Column, DataTable, Loading, StatCard};
use crate::hooks::ToastNotifier;
use crate::models::toasts::ToastState;
use crate::routes::MainRoute;

fn status_badge(status: &str) -> Html {
    let class = if status == "Active" {
        "badge badge-primary"
    } else {
        "badge badge-ghost"
    };
    html! { <span class={class}>{status.to_string()}</span> }
}

pub fn brand_columns(i18n_t: &dyn Fn(&str) -> String) -> Vec<Column<Brand>> {
    vec![
        Column::key("name", i18n_t("profile_detail.columns.brand")),
        Column::key("description", i18n_t("profile_detail.columns.description")),
        Column::key("status", i18n_t("profile_detail.columns.status"))
            .cell(|brand: &Brand| status_badge(&brand.status)),
        Column::key("createdAt", i18n_t("profile_detail.columns.created_at"))
            .cell(|brand: &Brand| html! { {format_date(&brand.created_at)} }),
    ]
}

pub fn social_account_columns(i18n_t: &dyn Fn(&str) -> String) -> Vec<Column<SocialAccount>> {
    vec![
        Column::key("platform", i18n_t("profile_detail.columns.platform")),
        Column::key("username", i18n_t("profile_detail.columns.username")),
        Column::key("status", i18n_t("profile_detail.columns.status"))
            .cell(|account: &SocialAccount| status_badge(&account.status)),
        Column::key("createdAt", i18n_t("profile_detail.columns.created_at"))
            .cell(|account: &SocialAccount| html! { {format_date(&account.created_at)} }),
    ]
}

pub fn team_columns(i18n_t: &dyn Fn(&str) -> String) -> Vec<Column<Team>> {
    vec![
        Column::key("name", i18n_t("profile_detail.columns.team")),
        Column::computed(
            "description",
            i18n_t("profile_detail.columns.description"),
            |team: &Team| CellValue::from(team.description.clone().unwrap_or_default()),
        ),
        Column::key("status", i18n_t("profile_detail.columns.status"))
            .cell(|team: &Team| status_badge(&team.status)),
        Column::key("memberCount", i18n_t("profile_detail.columns.members")),
        Column::key("createdAt", i18n_t("profile_detail.columns.created_at"))
            .cell(|team: &Team| html! { {format_date(&team.created_at)} }),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ProfileData {
    profile: Option<Profile>,
    subscription: Option<Subscription>,
    brands: Rc<Vec<Brand>>,
    social_accounts: Rc<Vec<SocialAccount>>,
    teams: Rc<Vec<Team>>,
}

async fn load(
    client: AdminClient,
    user_id: &str,
    profile_id: &str,
) -> Result<ProfileData, shared::ApiError> {
    let profiles = client.profiles(user_id).await?;
    let Some(profile) = profiles.into_iter().find(|profile| profile.id == profile_id) else {
        return Ok(ProfileData::default());
    };

    let subscriptions = or_empty(client.subscriptions().await, "subscriptions");
    let subscription = Subscription::for_profile(&subscriptions, profile_id).cloned();
    let brands = or_empty(client.brands(profile_id).await, "brands");
    let social_accounts = or_empty(client.social_accounts(profile_id).await, "social accounts");
    let teams = or_empty(client.teams().await, "teams");

    Ok(ProfileData {
        profile: Some(profile),
        subscription,
        brands: Rc::new(brands),
        social_accounts: Rc::new(social_accounts),
        teams: Rc::new(teams),
    })
}

#[derive(Properties, PartialEq, Eq)]
pub struct ProfileDetailPageProps {
    pub user_id: String,
    pub profile_id: String,
}

#[function_component(ProfileDetailPage)]
pub fn profile_detail_page(props: &ProfileDetailPageProps) -> Html {
    let (i18n, _) = use_translation();
    let toasts = use_dispatch::<ToastState>();
    let data = use_state(ProfileData::default);
    let loading = use_state(|| true);

    {
        let data = data.clone();
        let loading = loading.clone();
        let failure = i18n.t("profile_detail.load_failed");
        let ids = (props.user_id.clone(), props.profile_id.clone());
        use_effect_with(ids, move |(user_id, profile_id)| {
            let (user_id, profile_id) = (user_id.clone(), profile_id.clone());
            loading.set(true);
            spawn_local(async move {
                match load(AdminClient::shared(), &user_id, &profile_id).await {
                    Ok(loaded) => data.set(loaded),
                    Err(err) => {
                        tracing::warn!(%user_id, %profile_id, error = %err, "profile detail load failed");
                        ToastNotifier::new(toasts).notify(&failure, NoticeLevel::Error);
                        data.set(ProfileData::default());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    let back = html! {
        <Link<MainRoute>
            to={MainRoute::UserDetail { id: props.user_id.clone() }}
            classes="btn btn-outline btn-sm gap-2 w-full sm:w-auto"
        >
            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
            {i18n.t("profile_detail.back")}
        </Link<MainRoute>>
    };

    let Some(profile) = data.profile.clone() else {
        return html! {
            <div class="flex flex-col items-center gap-4 py-20 text-center">
                <h1 class="text-2xl font-bold">{i18n.t("profile_detail.not_found.title")}</h1>
                <p class="text-base-content/70">{i18n.t("profile_detail.not_found.description")}</p>
                {back}
            </div>
        };
    };

    let plan = data
        .subscription
        .as_ref()
        .map_or_else(|| i18n.t("profile_detail.no_plan"), |subscription| subscription.plan.clone());

    html! {
        <>
            <div class="flex flex-col gap-4">
                {back}
                <div>
                    <h1 class="text-3xl font-bold">{&profile.name}</h1>
                    <p class="text-base-content/70">
                        {format!("{} • {}", profile.profile_type.label(), profile.status.label())}
                    </p>
                </div>
            </div>

            <div class="stats stats-vertical md:stats-horizontal shadow-sm w-full">
                <StatCard title={i18n.t("profile_detail.plan")} value={plan} icon={IconId::HeroiconsOutlineCreditCard} />
                <StatCard
                    title={i18n.t("profile_detail.company")}
                    value={profile.company_name.clone().unwrap_or_else(|| PLACEHOLDER.to_string())}
                    icon={IconId::HeroiconsOutlineHome}
                />
                <StatCard
                    title={i18n.t("profile_detail.created_at")}
                    value={format_date(&profile.created_at)}
                    icon={IconId::HeroiconsOutlineDocument}
                />
            </div>

            <Section title={i18n.t("profile_detail.brands")} icon={IconId::HeroiconsOutlineHome}>
                <DataTable<Brand>
                    columns={Rc::new(brand_columns(&|key| i18n.t(key)))}
                    data={data.brands.clone()}
                    page_size={5}
                    empty_message={i18n.t("profile_detail.no_brands")}
                />
            </Section>
            <Section title={i18n.t("profile_detail.social_accounts")} icon={IconId::HeroiconsOutlineLink}>
                <DataTable<SocialAccount>
                    columns={Rc::new(social_account_columns(&|key| i18n.t(key)))}
                    data={data.social_accounts.clone()}
                    page_size={5}
                    empty_message={i18n.t("profile_detail.no_social_accounts")}
                />
            </Section>
            <Section title={i18n.t("profile_detail.teams")} icon={IconId::HeroiconsOutlineUsers}>
                <DataTable<Team>
                    columns={Rc::new(team_columns(&|key| i18n.t(key)))}
                    data={data.teams.clone()}
                    page_size={5}
                    empty_message={i18n.t("profile_detail.no_teams")}
                />
            </Section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    icon: IconId,
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <h2 class="card-title gap-2">
                    <Icon icon_id={props.icon} class="w-5 h-5" />
                    {&props.title}
                </h2>
                {props.children.clone()}
            </div>
        </div>
    }
}
