//! Admin stats and recent audit activity.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::state::admin::{self, AdminDashboardState};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let client = use_client();
    let state = RwSignal::new(AdminDashboardState::default());

    Effect::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                admin::fetch_dashboard(&client, state).await;
            });
        }
    });

    let stats = move || {
        state.get().dashboard.map(|d| {
            view! {
                <div class="admin-stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Users"</span>
                        <span class="stat-card__value">{d.system.total_users}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Wallets"</span>
                        <span class="stat-card__value">{d.system.total_wallets}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"KYC pending"</span>
                        <span class="stat-card__value">{d.system.kyc_pending}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Volume"</span>
                        <span class="stat-card__value">
                            {format!("{:.2}", d.transaction.total_volume)}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Transactions"</span>
                        <span class="stat-card__value">{d.transaction.transaction_count}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <DashboardLayout title="Admin">
            {move || state.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <Show when=move || state.get().loading>
                <p>"Loading stats..."</p>
            </Show>

            {stats}

            <section class="audit-log">
                <h2>"Recent audit activity"</h2>
                <table>
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Entity"</th>
                            <th>"User"</th>
                            <th>"IP"</th>
                            <th>"When"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || state.get().audit_logs key=|l| l.id.clone() let:log>
                            <tr>
                                <td>{log.action.clone()}</td>
                                <td>{format!("{} {}", log.entity, log.entity_id)}</td>
                                <td>{log.user_id.clone()}</td>
                                <td>{log.ip_address.clone()}</td>
                                <td>{log.created_at.clone()}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </section>
        </DashboardLayout>
    }
}
