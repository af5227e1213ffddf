//! Transaction table shared by the dashboard and history views.

use leptos::prelude::*;

use crate::net::types::{TransactionKind, TransactionRecord, TransactionStatus};

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Transfer => "Transfer",
        TransactionKind::Payment => "Payment",
        TransactionKind::Topup => "Top-up",
        TransactionKind::Withdrawal => "Withdrawal",
    }
}

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "tx-status tx-status--pending",
        TransactionStatus::Completed => "tx-status tx-status--completed",
        TransactionStatus::Failed => "tx-status tx-status--failed",
        TransactionStatus::Reversed => "tx-status tx-status--reversed",
    }
}

#[component]
pub fn TransactionList(transactions: Vec<TransactionRecord>) -> impl IntoView {
    if transactions.is_empty() {
        return view! { <p class="tx-list__empty">"No transactions yet."</p> }.into_any();
    }

    view! {
        <table class="tx-list">
            <thead>
                <tr>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Description"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {transactions
                    .into_iter()
                    .map(|tx| {
                        view! {
                            <tr>
                                <td>{kind_label(tx.kind)}</td>
                                <td>{format!("{:.2} {}", tx.amount, tx.currency)}</td>
                                <td>
                                    <span class=status_class(tx.status)>
                                        {format!("{:?}", tx.status)}
                                    </span>
                                </td>
                                <td>{tx.description.unwrap_or_default()}</td>
                                <td>{tx.created_at}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
