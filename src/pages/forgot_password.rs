//! Request a password reset email.

use leptos::prelude::*;

use crate::app::use_client;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = StoredValue::new_local(use_client());

    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        if busy.get() {
            return;
        }
        let client = client.get_value();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match client.forgot_password(&email.get_untracked()).await {
                Ok(_) => sent.set(true),
                Err(e) => error.set(Some(e.ui_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Reset password"</h1>

            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}

            <Show
                when=move || !sent.get()
                fallback=|| view! { <p>"If that account exists, a reset link is on its way."</p> }
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
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=submit.clone()
                    >
                        "Send reset link"
                    </button>
                </form>
            </Show>

            <a href="/auth/login">"Back to sign in"</a>
        </div>
    }
}
