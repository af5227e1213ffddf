//! Set a new password from an emailed reset link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::use_client;
use crate::session::gate::LOGIN_PATH;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let client = use_client();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let token = move || query.with(|q| q.get("token")).unwrap_or_default();

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let token = token();
            if token.is_empty() {
                error.set(Some("This reset link is missing its token.".to_owned()));
                return;
            }
            if password.get_untracked() != confirm.get_untracked() {
                error.set(Some("Passwords do not match.".to_owned()));
                return;
            }
            let client = client.clone();
            let navigate = navigate.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let result = client
                    .reset_password(&token, &password.get_untracked(), &confirm.get_untracked())
                    .await;
                match result {
                    Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
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
            <h1>"Choose a new password"</h1>

            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}

            <form class="auth-form" on:submit=move |ev| ev.prevent_default()>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=submit.clone()
                >
                    "Save password"
                </button>
            </form>
        </div>
    }
}
