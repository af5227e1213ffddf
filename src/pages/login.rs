//! Sign-in page: password step, optional 2FA step, Google hand-off.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::use_client;
use crate::net::types::{AuthResponse, Role};
use crate::session::BrowserSession;
use crate::session::gate::DEFAULT_AUTHENTICATED_PATH;

/// Where a fresh sign-in lands. An explicit in-app `callbackUrl` wins;
/// otherwise admins go to their dashboard and everyone else to theirs.
/// External or protocol-relative callback targets are ignored.
pub(crate) fn post_login_path(role: Role, callback: Option<&str>) -> String {
    if let Some(cb) = callback
        && cb.starts_with('/')
        && !cb.starts_with("//")
    {
        return cb.to_owned();
    }
    match role {
        Role::Admin => "/admin/dashboard".to_owned(),
        Role::User => DEFAULT_AUTHENTICATED_PATH.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let client = StoredValue::new_local(use_client());
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let awaiting_2fa = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let callback = move || query.with(|q| q.get("callbackUrl"));

    let finish = {
        let navigate = navigate.clone();
        move |resp: AuthResponse| {
            if resp.requires_2fa {
                awaiting_2fa.set(true);
                busy.set(false);
                return;
            }
            match resp.user.clone() {
                Some(user) => {
                    let path = post_login_path(user.role, callback().as_deref());
                    session.commit(user, resp.tokens());
                    navigate(&path, NavigateOptions::default());
                }
                None => {
                    error.set(Some("Sign-in response was incomplete.".to_owned()));
                    busy.set(false);
                }
            }
        }
    };

    // A Google redirect lands back here with the provider token in the
    // query string; exchange it like a password sign-in.
    Effect::new({
        let finish = finish.clone();
        move || {
            let Some(token) = query.with(|q| q.get("google_token")) else {
                return;
            };
            let client = client.get_value();
            let finish = finish.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match client.google_auth(&token).await {
                    Ok(resp) => finish(resp),
                    Err(e) => {
                        error.set(Some(e.ui_message()));
                        busy.set(false);
                    }
                }
            });
        }
    });

    let submit_password = {
        let finish = finish.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let client = client.get_value();
            let finish = finish.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match client.login(&email.get_untracked(), &password.get_untracked()).await {
                    Ok(resp) => finish(resp),
                    Err(e) => {
                        error.set(Some(e.ui_message()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let submit_code = {
        move |_| {
            if busy.get() {
                return;
            }
            let client = client.get_value();
            let finish = finish.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match client.verify_2fa(&email.get_untracked(), &code.get_untracked()).await {
                    Ok(resp) => finish(resp),
                    Err(e) => {
                        error.set(Some(e.ui_message()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>

            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}

            <Show
                when=move || !awaiting_2fa.get()
                fallback=move || {
                    view! {
                        <form class="auth-form" on:submit=move |ev| ev.prevent_default()>
                            <p>"Enter the 6-digit code from your authenticator."</p>
                            <label>
                                "Code"
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                />
                            </label>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=submit_code.clone()
                            >
                                "Verify"
                            </button>
                        </form>
                    }
                }
            >
                <form class="auth-form" on:submit=move |ev| ev.prevent_default()>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=submit_password.clone()
                    >
                        "Sign in"
                    </button>
                </form>

                <a class="btn auth-page__google" href="/api/v1/auth/google">
                    "Continue with Google"
                </a>

                <div class="auth-page__links">
                    <a href="/auth/forgot-password">"Forgot password?"</a>
                    <a href="/auth/register">"Create an account"</a>
                </div>
            </Show>
        </div>
    }
}
