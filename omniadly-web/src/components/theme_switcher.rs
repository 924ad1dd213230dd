use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state,
};
use yew_icons::{Icon, IconId};

const THEME_KEY: &str = "admin_theme";

/// The other DaisyUI theme.
pub fn toggled(theme: &str) -> &'static str {
    if theme == "dark" { "light" } else { "dark" }
}

fn apply_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

/// Stored theme, else the system preference.
fn initial_theme() -> String {
    if let Ok(theme) = LocalStorage::get::<String>(THEME_KEY) {
        return theme;
    }
    let prefers_dark = window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|media_query| media_query.matches());
    if prefers_dark { "dark" } else { "light" }.to_string()
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let current_theme = use_state(|| "dark".to_string());

    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |_| {
            let theme = initial_theme();
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let next = toggled(&current_theme);
            apply_theme(next);
            if let Err(err) = LocalStorage::set(THEME_KEY, next) {
                tracing::warn!(error = %err, "failed to persist theme");
            }
            current_theme.set(next.to_string());
        })
    };

    // The icon shows the theme a click switches to.
    let theme_icon = match current_theme.as_str() {
        "light" => IconId::HeroiconsSolidMoon,
        _ => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.selector")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
