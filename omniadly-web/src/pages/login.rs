use i18nrs::yew::use_translation;
use shared::auth::{LoginError, ValidationError, validate_email, validate_password};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::components::Loading;
use crate::hooks::{use_auth_gate, use_redirect_if_logged_in};
use crate::models::app_state::AppState;

/// Translation key of a validation message.
pub const fn validation_key(error: ValidationError) -> &'static str {
    match error {
        ValidationError::EmailRequired => "login.errors.email_required",
        ValidationError::InvalidEmail => "login.errors.invalid_email",
        ValidationError::PasswordRequired => "login.errors.password_required",
        ValidationError::PasswordTooShort => "login.errors.password_too_short",
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let checking = use_redirect_if_logged_in();
    let gate = use_auth_gate();
    let app = use_dispatch::<AppState>();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<ValidationError>);
    let password_error = use_state(|| None::<ValidationError>);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            email_error.set(validate_email(&email).err());
            password_error.set(validate_password(&password).err());

            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let gate = gate.clone();
            let app = app.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                match gate.sign_in(&request).await {
                    Ok(user) => app.reduce_mut(|app| app.user = Some(user)),
                    Err(LoginError::Validation(_)) => {}
                    Err(err) => tracing::debug!(error = %err, "sign-in refused"),
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                email_error.set(None);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let password_error = password_error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                password_error.set(None);
            }
        })
    };

    if checking {
        return html! { <Loading message_key="loading.verifying" /> };
    }

    let is_busy = *loading;
    let field_error = |error: Option<ValidationError>| {
        error.map_or_else(
            || html! {},
            |error| html! { <span class="text-error text-sm mt-1">{i18n.t(validation_key(error))}</span> },
        )
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    <p class="text-sm text-base-content/70">{i18n.t("login.subtitle")}</p>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{i18n.t("login.email")}</span>
                        </label>
                        <input
                            id="email"
                            class={classes!("input", "input-bordered", email_error.is_some().then_some("input-error"))}
                            type="email"
                            placeholder="admin@omniadly.io"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                        {field_error(*email_error)}
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{i18n.t("login.password")}</span>
                        </label>
                        <input
                            id="password"
                            class={classes!("input", "input-bordered", password_error.is_some().then_some("input-error"))}
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                        {field_error(*password_error)}
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            if is_busy {
                                <>
                                    <span class="loading loading-spinner loading-sm"></span>
                                    {i18n.t("login.signing_in")}
                                </>
                            } else {
                                {i18n.t("login.submit")}
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
