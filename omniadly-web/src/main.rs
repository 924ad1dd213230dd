mod api;
mod app;
mod components;
mod config;
mod containers;
mod hooks;
mod language;
mod models;
mod pages;
mod routes;
mod session;
mod telemetry;

#[cfg(test)]
mod api_test;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod hooks_test;

use std::collections::HashMap;

use app::App;
use config::AdminConfig;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::{DEFAULT_LANGUAGE, supported_languages};
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    let config = AdminConfig::new();
    let level = telemetry::init(&config);

    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => tracing::error!(
                file = location.file(),
                line = location.line(),
                column = location.column(),
                "panic: {payload}"
            ),
            None => tracing::error!("panic: {payload}"),
        }
    }));

    tracing::info!(api = config.api_base_url(), %level, "starting OmniAdly admin");

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => Renderer::<InternationalApp>::with_root(body.into()).render(),
        None => Renderer::<InternationalApp>::new().render(),
    };
}
