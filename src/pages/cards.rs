//! Payment methods: list, add, remove, choose the default.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::net::types::{NewPaymentMethod, PaymentMethodKind};
use crate::state::cards::{self, CardsState};

fn kind_label(kind: PaymentMethodKind) -> &'static str {
    match kind {
        PaymentMethodKind::Bank => "Bank account",
        PaymentMethodKind::Card => "Card",
        PaymentMethodKind::MobileWallet => "Mobile wallet",
    }
}

#[component]
pub fn CardsPage() -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let state = RwSignal::new(CardsState::default());
    let show_add = RwSignal::new(false);

    Effect::new({
        move || {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                cards::fetch_methods(&client, state).await;
            });
        }
    });

    view! {
        <DashboardLayout title="Payment methods">
            {move || state.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                "Add method"
            </button>

            <div class="card-list">
                <For each=move || state.get().methods key=|m| m.id.clone() let:method>
                    {
                        let id = method.id.clone();
                        let busy = {
                            let id = id.clone();
                            move || state.get().busy_method.as_deref() == Some(id.as_str())
                        };
                        let make_default = {
                            let id = id.clone();
                            move |_| {
                                let client = client.get_value();
                                let id = id.clone();
                                leptos::task::spawn_local(async move {
                                    cards::set_default(&client, state, &id).await;
                                });
                            }
                        };
                        let remove = {
                            move |_| {
                                let client = client.get_value();
                                let id = id.clone();
                                leptos::task::spawn_local(async move {
                                    cards::remove_method(&client, state, &id).await;
                                });
                            }
                        };
                        let busy_in_show = busy.clone();
                        let is_default = method.is_default;
                        let row_class =
                            if is_default { "card-row card-row--default" } else { "card-row" };
                        view! {
                            <div class=row_class>
                                <span>{kind_label(method.kind)}</span>
                                <span>
                                    {method
                                        .last_four_digits
                                        .clone()
                                        .map(|d| format!("•••• {d}"))
                                        .unwrap_or_default()}
                                </span>
                                <Show when=move || is_default>
                                    <span class="card-row__badge">"Default"</span>
                                </Show>
                                <Show when=move || !is_default>
                                    <button class="btn" disabled=busy_in_show.clone() on:click=make_default.clone()>
                                        "Make default"
                                    </button>
                                </Show>
                                <button class="btn" disabled=busy.clone() on:click=remove.clone()>
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                </For>
            </div>

            <Show when=move || show_add.get()>
                <AddMethodDialog state=state on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </DashboardLayout>
    }
}

#[component]
fn AddMethodDialog(state: RwSignal<CardsState>, on_close: Callback<()>) -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let kind = RwSignal::new(PaymentMethodKind::Card);
    let number = RwSignal::new(String::new());
    let make_default = RwSignal::new(false);

    let submit = move |_| {
        let digits = number.get_untracked();
        let last_four: String = digits.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        let method = NewPaymentMethod {
            kind: kind.get_untracked(),
            details: serde_json::json!({ "number": digits, "last_four_digits": last_four }),
            is_default: make_default.get_untracked(),
        };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            cards::add_method(&client, state, &method).await;
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add payment method"</h2>
                <label class="dialog__label">
                    "Type"
                    <select on:change=move |ev| {
                        kind.set(match event_target_value(&ev).as_str() {
                            "bank" => PaymentMethodKind::Bank,
                            "mobile_wallet" => PaymentMethodKind::MobileWallet,
                            _ => PaymentMethodKind::Card,
                        });
                    }>
                        <option value="card">"Card"</option>
                        <option value="bank">"Bank account"</option>
                        <option value="mobile_wallet">"Mobile wallet"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Number"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || number.get()
                        on:input=move |ev| number.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    <input
                        type="checkbox"
                        prop:checked=move || make_default.get()
                        on:change=move |ev| make_default.set(event_target_checked(&ev))
                    />
                    "Use as default"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=submit.clone()>"Add"</button>
                </div>
            </div>
        </div>
    }
}
