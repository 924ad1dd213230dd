//! The auth gate wired into Yew: router navigation, toast notices and the
//! browser session.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::auth::{AuthGate, GateError, GateState, Liveness, NoticeLevel, Notifier, Redirector};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::AdminClient;
use crate::config::AdminConfig;
use crate::models::app_state::AppState;
use crate::models::toasts::{TOAST_LIFETIME_MS, Toast, ToastState};
use crate::routes::MainRoute;

/// [`Redirector`] over the yew-router navigator.
#[derive(Clone)]
pub struct RouterRedirector {
    navigator: Option<Navigator>,
}

impl std::fmt::Debug for RouterRedirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterRedirector")
            .field("mounted", &self.navigator.is_some())
            .finish()
    }
}

impl Redirector for RouterRedirector {
    fn redirect(&self, path: &str) {
        let Some(navigator) = &self.navigator else {
            warn!(path, "no router in scope, redirect dropped");
            return;
        };
        match MainRoute::recognize(path) {
            Some(route) => navigator.push(&route),
            None => warn!(path, "redirect to unknown path"),
        }
    }
}

/// [`Notifier`] that raises a toast and dismisses it after
/// [`TOAST_LIFETIME_MS`].
#[derive(Clone)]
pub struct ToastNotifier {
    dispatch: Dispatch<ToastState>,
}

impl std::fmt::Debug for ToastNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastNotifier").finish_non_exhaustive()
    }
}

impl ToastNotifier {
    pub const fn new(dispatch: Dispatch<ToastState>) -> Self {
        Self { dispatch }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        let toast = Toast::new(message, level);
        let id = toast.id;
        self.dispatch.reduce_mut(|state| state.push(toast));

        let dispatch = self.dispatch.clone();
        Timeout::new(TOAST_LIFETIME_MS, move || {
            dispatch.reduce_mut(|state| state.dismiss(id));
        })
        .forget();
    }
}

/// Gate bound to the browser session, the shared API client, the router and
/// the toast store.
#[hook]
pub fn use_auth_gate() -> AuthGate {
    let navigator = use_navigator();
    let toasts = use_dispatch::<ToastState>();

    let client = AdminClient::shared();
    AuthGate::new(
        client.session(),
        Rc::new(client),
        Rc::new(RouterRedirector { navigator }),
        Rc::new(ToastNotifier::new(toasts)),
    )
    .with_routes(AdminConfig::new().gate_routes())
}

/// Run the admin check once on mount.
///
/// Stays pending until the check resolves; a result that arrives after
/// unmount is dropped.
#[hook]
pub fn use_admin_auth() -> GateState {
    let gate = use_auth_gate();
    let state = use_state(GateState::pending);
    let is_mounted = use_is_mounted();
    let app = use_dispatch::<AppState>();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = gate.check_admin_access(&*is_mounted).await;
                if matches!(outcome, Err(GateError::Unmounted)) {
                    return;
                }
                let user = outcome.as_ref().ok().cloned();
                app.reduce_mut(|app| app.user = user);
                state.set(GateState::from_outcome(&outcome));
            });
            || ()
        });
    }

    (*state).clone()
}

/// Run the login page's session check, then report through `set_checking`
/// that the form may be shown. Nothing is reported once the page is gone.
pub async fn settle_login_check<L>(gate: &AuthGate, alive: &L, set_checking: impl FnOnce(bool))
where
    L: Liveness + ?Sized,
{
    gate.redirect_if_authenticated(alive).await;
    if alive.is_alive() {
        set_checking(false);
    }
}

/// Login page helper: leave for the dashboard when the stored session
/// already belongs to an admin. Returns `true` while that check is running.
#[hook]
pub fn use_redirect_if_logged_in() -> bool {
    let gate = use_auth_gate();
    let is_mounted = use_is_mounted();
    let checking = use_state(|| true);

    {
        let checking = checking.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                settle_login_check(&gate, &*is_mounted, |value| checking.set(value)).await;
            });
            || ()
        });
    }

    *checking
}

/// Callback that signs the admin out.
#[hook]
pub fn use_sign_out() -> Callback<()> {
    let gate = use_auth_gate();
    let app = use_dispatch::<AppState>();

    Callback::from(move |()| {
        gate.sign_out();
        app.reduce_mut(|app| app.user = None);
    })
}
