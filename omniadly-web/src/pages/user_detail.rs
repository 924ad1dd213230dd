use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::auth::{NoticeLevel, Notifier};
use shared::format::{PLACEHOLDER, format_date, format_optional_date};
use shared::models::{Payment, Profile, Subscription, UserDetail};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::{AdminClient, or_empty};
use crate::components::{DataTable, Loading};
use crate::hooks::ToastNotifier;
use crate::models::toasts::ToastState;
use crate::pages::payments::payment_columns;
use crate::routes::MainRoute;

/// Subscriptions attached to any of `profiles`.
pub fn subscriptions_of(
    profiles: &[Profile],
    subscriptions: Vec<Subscription>,
) -> Vec<Subscription> {
    subscriptions
        .into_iter()
        .filter(|subscription| {
            profiles
                .iter()
                .any(|profile| profile.id == subscription.profile_id)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
struct UserData {
    user: Option<UserDetail>,
    profiles: Vec<Profile>,
    subscriptions: Vec<Subscription>,
    payments: Rc<Vec<Payment>>,
}

async fn load(client: AdminClient, user_id: String) -> Result<UserData, shared::ApiError> {
    let user = client.user(&user_id).await?;
    let profiles = or_empty(client.profiles(&user_id).await, "profiles");
    let subscriptions = or_empty(client.subscriptions().await, "subscriptions");
    let payments = or_empty(client.user_payments(&user_id).await, "user payments");
    Ok(UserData {
        user: Some(user),
        subscriptions: subscriptions_of(&profiles, subscriptions),
        profiles,
        payments: Rc::new(payments),
    })
}

#[derive(Properties, PartialEq, Eq)]
pub struct UserDetailPageProps {
    pub user_id: String,
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &UserDetailPageProps) -> Html {
    let (i18n, _) = use_translation();
    let toasts = use_dispatch::<ToastState>();
    let data = use_state(UserData::default);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<String>);

    {
        let data = data.clone();
        let loading = loading.clone();
        let failure = i18n.t("user_detail.load_failed");
        use_effect_with(props.user_id.clone(), move |user_id| {
            let user_id = user_id.clone();
            loading.set(true);
            spawn_local(async move {
                match load(AdminClient::shared(), user_id.clone()).await {
                    Ok(loaded) => data.set(loaded),
                    Err(err) => {
                        tracing::warn!(user_id = %user_id, error = %err, "user detail load failed");
                        ToastNotifier::new(toasts).notify(&failure, NoticeLevel::Error);
                        data.set(UserData::default());
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
        <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-outline btn-sm gap-2 w-full sm:w-auto">
            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
            {i18n.t("user_detail.back")}
        </Link<MainRoute>>
    };

    let Some(user) = data.user.clone() else {
        return html! {
            <div class="flex flex-col items-center gap-4 py-20 text-center">
                <h1 class="text-2xl font-bold">{i18n.t("user_detail.not_found.title")}</h1>
                <p class="text-base-content/70">{i18n.t("user_detail.not_found.description")}</p>
                {back}
            </div>
        };
    };

    let status_badge = |active: bool| {
        let (class, key) = if active {
            ("badge badge-primary", "common.active")
        } else {
            ("badge badge-ghost", "common.inactive")
        };
        html! { <span class={class}>{i18n.t(key)}</span> }
    };

    let profile_cards = data.profiles.iter().map(|profile| {
        let is_selected = selected.as_deref() == Some(profile.id.as_str());
        let onclick = {
            let selected = selected.clone();
            let id = profile.id.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(id.clone())))
        };
        let detail_route = MainRoute::ProfileDetail {
            id: user.id.clone(),
            profile_id: profile.id.clone(),
        };
        html! {
            <div
                key={profile.id.clone()}
                class={classes!("card", "bg-base-100", "cursor-pointer", "hover:shadow-md", is_selected.then_some("ring-2"), is_selected.then_some("ring-primary"))}
                {onclick}
            >
                <div class="card-body p-4 flex-row items-center justify-between gap-2">
                    <div class="min-w-0">
                        <h4 class="font-medium truncate">{&profile.name}</h4>
                        <p class="text-sm text-base-content/60 truncate">
                            {format!("{} • {}", profile.profile_type.label(), profile.status.label())}
                        </p>
                    </div>
                    <Link<MainRoute> to={detail_route} classes="btn btn-ghost btn-xs">
                        {i18n.t("user_detail.view_profile")}
                    </Link<MainRoute>>
                </div>
            </div>
        }
    });

    let selected_profile = selected
        .as_deref()
        .and_then(|id| data.profiles.iter().find(|profile| profile.id == id));

    let subscription_panel = match selected_profile {
        None => html! {
            <div class="text-center py-8 text-base-content/60">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-12 h-12 mx-auto mb-4" />
                <p>{i18n.t("user_detail.subscription.select")}</p>
            </div>
        },
        Some(profile) => match Subscription::for_profile(&data.subscriptions, &profile.id) {
            None => html! {
                <div class="text-center py-8 text-base-content/60">
                    <Icon icon_id={IconId::HeroiconsOutlineCreditCard} class="w-12 h-12 mx-auto mb-4" />
                    <p>{i18n.t("user_detail.subscription.none")}</p>
                </div>
            },
            Some(subscription) => html! {
                <div class="flex flex-col gap-4">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <Field label={i18n.t("user_detail.subscription.plan")}>
                            <p class="text-lg font-semibold">{&subscription.plan}</p>
                        </Field>
                        <Field label={i18n.t("user_detail.status")}>
                            {status_badge(subscription.is_active)}
                        </Field>
                        <Field label={i18n.t("user_detail.subscription.posts_per_month")}>
                            <p class="text-lg font-semibold">{subscription.quota_posts_per_month.to_string()}</p>
                        </Field>
                        <Field label={i18n.t("user_detail.subscription.storage")}>
                            <p class="text-lg font-semibold">{format!("{} GB", subscription.quota_storage_gb)}</p>
                        </Field>
                        <Field label={i18n.t("user_detail.subscription.start_date")}>
                            <p class="text-sm">{format_date(&subscription.start_date)}</p>
                        </Field>
                        <Field label={i18n.t("user_detail.subscription.end_date")}>
                            <p class="text-sm">{format_optional_date(subscription.end_date.as_deref())}</p>
                        </Field>
                    </div>
                    <div class="divider my-0"></div>
                    <div class="flex flex-col gap-2 text-sm">
                        <div class="flex justify-between">
                            <span class="text-base-content/60">{i18n.t("user_detail.profile_type")}</span>
                            <span>{profile.profile_type.label()}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-base-content/60">{i18n.t("user_detail.created_at")}</span>
                            <span>{format_date(&profile.created_at)}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-base-content/60">{i18n.t("user_detail.company")}</span>
                            <span>{profile.company_name.as_deref().unwrap_or(PLACEHOLDER)}</span>
                        </div>
                    </div>
                </div>
            },
        },
    };

    let payment_table_columns = Rc::new(payment_columns(&|key| i18n.t(key)));

    html! {
        <>
            <div class="flex flex-col gap-4">
                {back}
                <div>
                    <h1 class="text-3xl font-bold">{i18n.t("user_detail.title")}</h1>
                    <p class="text-base-content/70">{i18n.t("user_detail.subtitle")}</p>
                </div>
            </div>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-5 h-5" />
                        {&user.email}
                    </h2>
                    <p class="text-sm text-base-content/60">{format!("ID: {}", user.id)}</p>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-2">
                        <Field label={i18n.t("user_detail.status")}>{status_badge(user.is_active)}</Field>
                        <Field label={i18n.t("user_detail.role")}><p class="text-sm">{user.role.to_string()}</p></Field>
                        <Field label={i18n.t("user_detail.created_at")}><p class="text-sm">{format_date(&user.created_at)}</p></Field>
                        <Field label={i18n.t("user_detail.social_accounts")}><p class="text-sm">{user.social_accounts_count.to_string()}</p></Field>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title">
                            {format!("{} ({})", i18n.t("user_detail.profiles"), data.profiles.len())}
                        </h2>
                        <p class="text-sm text-base-content/60">{i18n.t("user_detail.profiles_hint")}</p>
                        if data.profiles.is_empty() {
                            <p class="text-base-content/60">{i18n.t("user_detail.no_profiles")}</p>
                        } else {
                            <div class="flex flex-col gap-3">{ for profile_cards }</div>
                        }
                    </div>
                </div>
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineCreditCard} class="w-5 h-5" />
                            {i18n.t("user_detail.subscription.title")}
                        </h2>
                        {subscription_panel}
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title">{i18n.t("user_detail.payments")}</h2>
                    <DataTable<Payment>
                        columns={payment_table_columns}
                        data={data.payments.clone()}
                        page_size={5}
                        empty_message={i18n.t("payments.empty")}
                    />
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    children: Children,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <div>
            <p class="text-sm font-medium text-base-content/60">{&props.label}</p>
            {props.children.clone()}
        </div>
    }
}
