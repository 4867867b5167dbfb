//! Login page: username + password against the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Successful login flips the session to authenticated; the redirect effect
//! below then moves the user to the dashboard. Signed-in visitors are
//! bounced the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::services::AppServices;
use crate::state::session::SessionContext;
use crate::util::auth::login_redirect;
use crate::util::breakpoint::Breakpoint;

pub const LOGIN_FAILURE: &str = "Invalid username or password. Please try again.";
pub const MISSING_FIELDS: &str = "Please enter both username and password";

/// Both fields must be non-empty; values are passed through untrimmed.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let session = expect_context::<SessionContext>().state;
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(path) = login_redirect(&session.get()) {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let store = services.session.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.login(&credentials).await {
                log::error!("login failed: {err}");
                error.set(Some(LOGIN_FAILURE.to_owned()));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="card login-card" class:login-card--compact=move || breakpoint.get().is_mobile()>
                <div class="login-card__header">
                    <h1 class="login-card__brand">"DATAIDEA BRICS"</h1>
                    <p class="login-card__subtitle">"LLM Analytics Platform"</p>
                </div>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Username *"</span>
                        <input
                            class="field__input"
                            id="username"
                            name="username"
                            autocomplete="username"
                            autofocus
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password *"</span>
                        <input
                            class="field__input"
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-card__links">
                    <a href="#">"Forgot password?"</a>
                </div>
                <div class="login-divider">"OR"</div>
                <div class="login-card__demo">
                    <p>"Demo credentials"</p>
                    <p>
                        <strong>"Username:"</strong>
                        " demo"
                    </p>
                    <p>
                        <strong>"Password:"</strong>
                        " demo123"
                    </p>
                </div>
            </div>
        </div>
    }
}
