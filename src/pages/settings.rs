//! Profile settings. The session takes the snapshot the backend returns
//! from the update, so it always mirrors what was actually stored.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::net::types::ProfileUpdate;
use crate::session::BrowserSession;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let client = StoredValue::new_local(use_client());

    let current = session.snapshot().user;
    let first_name = RwSignal::new(current.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(current.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let username = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        if busy.get() {
            return;
        }
        let client = client.get_value();
        busy.set(true);
        saved.set(false);
        error.set(None);
        leptos::task::spawn_local(async move {
            let some_if_filled = |s: String| (!s.trim().is_empty()).then_some(s);
            let update = ProfileUpdate {
                first_name: some_if_filled(first_name.get_untracked()),
                last_name: some_if_filled(last_name.get_untracked()),
                username: some_if_filled(username.get_untracked()),
                phone: some_if_filled(phone.get_untracked()),
                avatar_url: None,
            };
            match client.update_profile(&update).await {
                Ok(user) => {
                    session.set_user(user);
                    saved.set(true);
                }
                Err(e) => error.set(Some(e.ui_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <DashboardLayout title="Settings">
            {move || error.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
            <Show when=move || saved.get()>
                <p class="settings-page__saved">"Profile updated."</p>
            </Show>

            <form class="settings-form" on:submit=move |ev| ev.prevent_default()>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=submit.clone()
                >
                    "Save"
                </button>
            </form>
        </DashboardLayout>
    }
}
