//! Invoices and billing stats, with pay and cancel actions.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::net::types::InvoiceStatus;
use crate::state::billing::{self, BillingState};

fn status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Pending => "Pending",
        InvoiceStatus::Paid => "Paid",
        InvoiceStatus::Canceled => "Canceled",
        InvoiceStatus::Overdue => "Overdue",
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let state = RwSignal::new(BillingState::default());

    Effect::new({
        move || {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                billing::fetch_billing(&client, state).await;
            });
        }
    });

    let stats = move || {
        state.get().stats.map(|s| {
            view! {
                <div class="billing-stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Invoiced"</span>
                        <span class="stat-card__value">{format!("{:.2}", s.total_invoiced)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Paid"</span>
                        <span class="stat-card__value">{format!("{:.2}", s.total_paid)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Outstanding"</span>
                        <span class="stat-card__value">{format!("{:.2}", s.total_pending)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Invoices"</span>
                        <span class="stat-card__value">{s.invoice_count}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <DashboardLayout title="Billing">
            {move || state.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}
            {stats}

            <Show when=move || state.get().loading>
                <p>"Loading invoices..."</p>
            </Show>

            <table class="invoice-list">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Amount"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || state.get().invoices key=|inv| inv.id.clone() let:invoice>
                        {
                            let id = invoice.id.clone();
                            let busy = {
                                let id = id.clone();
                                move || state.get().busy_invoice.as_deref() == Some(id.as_str())
                            };
                            let pay = {
                                let id = id.clone();
                                move |_| {
                                    let client = client.get_value();
                                    let id = id.clone();
                                    leptos::task::spawn_local(async move {
                                        billing::pay_invoice(&client, state, &id).await;
                                    });
                                }
                            };
                            let cancel = {
                                move |_| {
                                    let client = client.get_value();
                                    let id = id.clone();
                                    leptos::task::spawn_local(async move {
                                        billing::cancel_invoice(&client, state, &id).await;
                                    });
                                }
                            };
                            let actionable = matches!(
                                invoice.status,
                                InvoiceStatus::Pending | InvoiceStatus::Overdue
                            );
                            view! {
                                <tr>
                                    <td>{invoice.description.clone()}</td>
                                    <td>{format!("{:.2} {}", invoice.amount, invoice.currency)}</td>
                                    <td>{invoice.due_date.clone()}</td>
                                    <td>{status_label(invoice.status)}</td>
                                    <td>
                                        <Show when=move || actionable>
                                            <button
                                                class="btn btn--primary"
                                                disabled=busy.clone()
                                                on:click=pay.clone()
                                            >
                                                "Pay"
                                            </button>
                                            <button
                                                class="btn"
                                                disabled=busy.clone()
                                                on:click=cancel.clone()
                                            >
                                                "Cancel"
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </DashboardLayout>
    }
}
