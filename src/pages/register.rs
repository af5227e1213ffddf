//! Three-step registration wizard: identity, credentials, review.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::net::types::RegistrationForm;
use crate::session::BrowserSession;
use crate::session::gate::{DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};

const MIN_PASSWORD_LEN: usize = 8;

/// Validate the fields a wizard step collects before letting the user
/// advance. Returns the first problem found, if any.
pub(crate) fn validate_step(step: u8, form: &RegistrationForm) -> Option<&'static str> {
    match step {
        1 => {
            if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
                return Some("First and last name are required.");
            }
            if !form.email.contains('@') {
                return Some("Enter a valid email address.");
            }
            None
        }
        2 => {
            if form.password.len() < MIN_PASSWORD_LEN {
                return Some("Password must be at least 8 characters.");
            }
            if form.password != form.confirm_password {
                return Some("Passwords do not match.");
            }
            None
        }
        _ => None,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let client = StoredValue::new_local(use_client());
    let navigate = use_navigate();

    let step = RwSignal::new(1_u8);
    let form = RwSignal::new(RegistrationForm::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let api_error = RwSignal::new(None::<String>);

    let advance = move |_| {
        let problem = form.with(|f| validate_step(step.get_untracked(), f));
        match problem {
            Some(msg) => error.set(Some(msg)),
            None => {
                error.set(None);
                step.update(|s| *s += 1);
            }
        }
    };

    let back = move |_| {
        error.set(None);
        step.update(|s| *s = s.saturating_sub(1));
    };

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let client = client.get_value();
            let navigate = navigate.clone();
            busy.set(true);
            api_error.set(None);
            leptos::task::spawn_local(async move {
                let payload = form.get_untracked();
                match client.register(&payload).await {
                    Ok(resp) if resp.requires_2fa => {
                        // Account created; the first sign-in completes 2FA.
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Ok(resp) => match resp.user.clone() {
                        Some(user) => {
                            session.commit(user, resp.tokens());
                            navigate(DEFAULT_AUTHENTICATED_PATH, NavigateOptions::default());
                        }
                        None => {
                            api_error.set(Some("Registration response was incomplete.".to_owned()));
                            busy.set(false);
                        }
                    },
                    Err(e) => {
                        api_error.set(Some(e.ui_message()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let text_field = move |label: &'static str,
                          get: fn(&RegistrationForm) -> String,
                          set: fn(&mut RegistrationForm, String),
                          input_type: &'static str| {
        view! {
            <label>
                {label}
                <input
                    type=input_type
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
            <p class="auth-page__step">{move || format!("Step {} of 3", step.get())}</p>

            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}
            {move || api_error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}

            <form class="auth-form" on:submit=move |ev| ev.prevent_default()>
                <Show when=move || step.get() == 1>
                    {text_field("First name", |f| f.first_name.clone(), |f, v| f.first_name = v, "text")}
                    {text_field("Last name", |f| f.last_name.clone(), |f, v| f.last_name = v, "text")}
                    {text_field("Email", |f| f.email.clone(), |f, v| f.email = v, "email")}
                </Show>

                <Show when=move || step.get() == 2>
                    {text_field("Password", |f| f.password.clone(), |f, v| f.password = v, "password")}
                    {text_field(
                        "Confirm password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                        "password",
                    )}
                    <label>
                        "Phone (optional)"
                        <input
                            type="tel"
                            prop:value=move || form.with(|f| f.phone.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.phone = (!v.is_empty()).then_some(v));
                            }
                        />
                    </label>
                </Show>

                <Show when=move || step.get() == 3>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.enable_2fa)
                            on:change=move |ev| {
                                form.update(|f| f.enable_2fa = event_target_checked(&ev));
                            }
                        />
                        "Enable two-factor authentication"
                    </label>
                    <p class="auth-form__review">
                        {move || form.with(|f| format!("{} {} · {}", f.first_name, f.last_name, f.email))}
                    </p>
                </Show>

                <div class="auth-form__actions">
                    <Show when=move || { step.get() > 1 }>
                        <button class="btn" on:click=back>"Back"</button>
                    </Show>
                    <Show when=move || step.get() < 3>
                        <button class="btn btn--primary" on:click=advance>"Next"</button>
                    </Show>
                    <Show when=move || step.get() == 3>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=submit.clone()
                        >
                            "Create account"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
