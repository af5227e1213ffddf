//! Wallet balance card for the dashboard.

use leptos::prelude::*;

use crate::state::wallet::WalletState;

/// Shows the current balance with top-up and withdraw actions.
#[component]
pub fn BalanceCard(
    wallet: RwSignal<WalletState>,
    on_top_up: Callback<()>,
    on_withdraw: Callback<()>,
) -> impl IntoView {
    let amount = move || {
        let w = wallet.get();
        format!("{:.2} {}", w.balance, w.currency)
    };

    view! {
        <div class="balance-card">
            <span class="balance-card__label">"Available balance"</span>
            <span class="balance-card__amount">{amount}</span>
            <Show when=move || wallet.get().loading>
                <span class="balance-card__loading">"Updating..."</span>
            </Show>
            <div class="balance-card__actions">
                <button class="btn btn--primary" on:click=move |_| on_top_up.run(())>
                    "Top up"
                </button>
                <button class="btn" on:click=move |_| on_withdraw.run(())>
                    "Withdraw"
                </button>
            </div>
        </div>
    }
}
