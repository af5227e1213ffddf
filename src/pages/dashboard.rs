//! Wallet overview: balance, top-up and withdraw dialogs, recent activity.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::balance_card::BalanceCard;
use crate::components::layout::DashboardLayout;
use crate::components::transaction_list::TransactionList;
use crate::state::wallet::{self, WalletState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum MoneyDialog {
    TopUp,
    Withdraw,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_client();
    let wallet = RwSignal::new(WalletState::default());
    let dialog = RwSignal::new(None::<MoneyDialog>);

    Effect::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                wallet::fetch_dashboard(&client, wallet).await;
            });
        }
    });

    let open_top_up = Callback::new(move |()| dialog.set(Some(MoneyDialog::TopUp)));
    let open_withdraw = Callback::new(move |()| dialog.set(Some(MoneyDialog::Withdraw)));
    let close = Callback::new(move |()| dialog.set(None));

    view! {
        <DashboardLayout title="Overview">
            {move || wallet.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <BalanceCard wallet=wallet on_top_up=open_top_up on_withdraw=open_withdraw/>

            <section class="recent-activity">
                <h2>"Recent activity"</h2>
                {move || view! { <TransactionList transactions=wallet.get().transactions/> }}
            </section>

            {move || {
                dialog
                    .get()
                    .map(|which| view! { <AmountDialog which=which wallet=wallet on_close=close/> })
            }}
        </DashboardLayout>
    }
}

/// Shared dialog for top-up and withdraw; only the verb and the wallet
/// call differ.
#[component]
fn AmountDialog(
    which: MoneyDialog,
    wallet: RwSignal<WalletState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_client();
    let amount = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<&'static str>);

    let title = match which {
        MoneyDialog::TopUp => "Top up",
        MoneyDialog::Withdraw => "Withdraw",
    };

    let submit = move |_| {
        let Ok(value) = amount.get_untracked().trim().parse::<f64>() else {
            problem.set(Some("Enter a valid amount."));
            return;
        };
        if value <= 0.0 {
            problem.set(Some("Amount must be positive."));
            return;
        }
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match which {
                MoneyDialog::TopUp => wallet::top_up(&client, wallet, value).await,
                MoneyDialog::Withdraw => wallet::withdraw(&client, wallet, value).await,
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {move || problem.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}
                <label class="dialog__label">
                    "Amount (USD)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=submit.clone()>{title}</button>
                </div>
            </div>
        </div>
    }
}
