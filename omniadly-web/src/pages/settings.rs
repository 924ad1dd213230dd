use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

use crate::components::language_selector::LanguageSelector;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::config::AdminConfig;

/// Appearance and environment settings of the dashboard.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let (i18n, _) = use_translation();
    let config = AdminConfig::new();
    let page_sizes = config
        .page_size_options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <>
            <div>
                <h1 class="text-3xl font-bold">{i18n.t("settings.title")}</h1>
                <p class="text-base-content/70">{i18n.t("settings.subtitle")}</p>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body flex-row items-center justify-between">
                        <div>
                            <h2 class="card-title">{i18n.t("settings.theme.title")}</h2>
                            <p class="text-sm text-base-content/70">{i18n.t("settings.theme.description")}</p>
                        </div>
                        <ThemeSwitcher />
                    </div>
                </div>
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body flex-row items-center justify-between">
                        <div>
                            <h2 class="card-title">{i18n.t("settings.language.title")}</h2>
                            <p class="text-sm text-base-content/70">{i18n.t("settings.language.description")}</p>
                        </div>
                        <LanguageSelector />
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineInformationCircle} class="w-5 h-5" />
                        {i18n.t("settings.environment.title")}
                    </h2>
                    <dl class="grid gap-3 sm:grid-cols-3">
                        <div>
                            <dt class="text-sm text-base-content/70">{i18n.t("settings.environment.api")}</dt>
                            <dd class="font-mono break-all">{config.api_base_url().to_string()}</dd>
                        </div>
                        <div>
                            <dt class="text-sm text-base-content/70">{i18n.t("settings.environment.log_level")}</dt>
                            <dd class="font-mono">{config.log_level.clone()}</dd>
                        </div>
                        <div>
                            <dt class="text-sm text-base-content/70">{i18n.t("settings.environment.page_sizes")}</dt>
                            <dd class="font-mono">{page_sizes}</dd>
                        </div>
                    </dl>
                </div>
            </div>
        </>
    }
}
