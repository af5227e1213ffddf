//! Send money: debounced recipient search, then a transfer form.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;
use crate::net::types::PublicUser;
use crate::state::users::{self, UserSearchState};
use crate::state::wallet::{self, WalletState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};

#[component]
pub fn SendPage() -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let search = RwSignal::new(UserSearchState::default());
    let wallet = RwSignal::new(WalletState::default());
    let recipient = RwSignal::new(None::<PublicUser>);
    let sent = RwSignal::new(None::<String>);
    let debouncer = StoredValue::new_local(Debouncer::new());

    // One backend call per settled keystroke burst, against the final text.
    let on_query = {
        move |ev| {
            let text = event_target_value(&ev);
            recipient.set(None);
            sent.set(None);

            if text.trim().is_empty() {
                debouncer.get_value().arm();
                search.update(UserSearchState::clear);
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let client = client.get_value();
                debouncer.get_value().schedule(SEARCH_DEBOUNCE_MS, move || {
                    leptos::task::spawn_local(async move {
                        users::search(&client, search, &text).await;
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &text);
            }
        }
    };

    view! {
        <DashboardLayout title="Send money">
            <label class="send-page__search">
                "Recipient"
                <input
                    type="text"
                    placeholder="Search by name or email"
                    on:input=on_query
                />
            </label>

            <Show when=move || search.get().searching>
                <p class="send-page__hint">"Searching..."</p>
            </Show>
            {move || search.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <Show when=move || recipient.get().is_none()>
                <div class="send-page__results">
                    <For each=move || search.get().results key=|u| u.id.clone() let:user>
                        {
                            let pick = user.clone();
                            view! {
                                <button
                                    class="send-page__result"
                                    on:click=move |_| recipient.set(Some(pick.clone()))
                                >
                                    <Avatar
                                        first_name=user.first_name.clone()
                                        last_name=user.last_name.clone()
                                        avatar_url=user.avatar_url.clone()
                                    />
                                    <span>{format!("{} {}", user.first_name, user.last_name)}</span>
                                    <span class="send-page__email">{user.email.clone()}</span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </Show>

            {move || {
                recipient
                    .get()
                    .map(|user| view! { <TransferForm user=user wallet=wallet sent=sent/> })
            }}

            {move || sent.get().map(|msg| view! { <p class="send-page__success">{msg}</p> })}
        </DashboardLayout>
    }
}

#[component]
fn TransferForm(
    user: PublicUser,
    wallet: RwSignal<WalletState>,
    sent: RwSignal<Option<String>>,
) -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);

    let recipient_label = format!("{} {} ({})", user.first_name, user.last_name, user.email);
    let to_email = user.email.clone();

    let submit = move |_| {
        let Ok(value) = amount.get_untracked().trim().parse::<f64>() else {
            problem.set(Some("Enter a valid amount.".to_owned()));
            return;
        };
        if value <= 0.0 {
            problem.set(Some("Amount must be positive.".to_owned()));
            return;
        }
        let client = client.get_value();
        let to_email = to_email.clone();
        problem.set(None);
        leptos::task::spawn_local(async move {
            let note = description.get_untracked();
            let note = (!note.trim().is_empty()).then_some(note);
            let result =
                wallet::transfer(&client, wallet, &to_email, value, note.as_deref()).await;
            match result {
                Ok(()) => sent.set(Some(format!("Sent {value:.2} USD to {to_email}."))),
                Err(msg) => problem.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="transfer-form">
            <h2>{format!("Send to {recipient_label}")}</h2>
            {move || problem.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
            <label>
                "Amount (USD)"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Note (optional)"
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || wallet.get().loading
                on:click=submit.clone()
            >
                "Send"
            </button>
        </div>
    }
}
