//! Admin user table: debounced search, paging, activate/suspend toggle.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::state::admin::{self, AdminUsersState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let client = StoredValue::new_local(use_client());
    let state = RwSignal::new(AdminUsersState::default());
    let debouncer = StoredValue::new_local(Debouncer::new());

    Effect::new({
        move || {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                admin::fetch_users(&client, state, 1, "").await;
            });
        }
    });

    let on_search = {
        move |ev| {
            let text = event_target_value(&ev);
            #[cfg(feature = "hydrate")]
            {
                let client = client.get_value();
                debouncer.get_value().schedule(SEARCH_DEBOUNCE_MS, move || {
                    leptos::task::spawn_local(async move {
                        // A new search always restarts from the first page.
                        admin::fetch_users(&client, state, 1, &text).await;
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &debouncer, &text);
            }
        }
    };

    let go_to_page = {
        move |page: u32| {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                let search = state.with_untracked(|s| s.search.clone());
                admin::fetch_users(&client, state, page, &search).await;
            });
        }
    };

    let prev = {
        let go_to_page = go_to_page.clone();
        move |_| {
            let page = state.with_untracked(|s| s.page);
            if page > 1 {
                go_to_page(page - 1);
            }
        }
    };
    let next = {
        let go_to_page = go_to_page.clone();
        move |_| {
            let (page, pages) = state.with_untracked(|s| (s.page, s.total_pages()));
            if page < pages {
                go_to_page(page + 1);
            }
        }
    };

    view! {
        <DashboardLayout title="Users">
            {move || state.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <input
                class="admin-users__search"
                type="text"
                placeholder="Search by name or email"
                on:input=on_search
            />

            <table class="admin-users">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"KYC"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || state.get().users key=|u| u.id.clone() let:user>
                        {
                            let id = user.id.clone();
                            let busy = {
                                let id = id.clone();
                                move || state.get().toggling.as_deref() == Some(id.as_str())
                            };
                            let toggle = move |_| {
                                let client = client.get_value();
                                let id = id.clone();
                                leptos::task::spawn_local(async move {
                                    admin::toggle_user_status(&client, state, &id).await;
                                });
                            };
                            let active = user.is_active;
                            let row_class = if active { "" } else { "admin-users__suspended" };
                            view! {
                                <tr class=row_class>
                                    <td>{format!("{} {}", user.first_name, user.last_name)}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.kyc_status.clone()}</td>
                                    <td>{user.created_at.clone()}</td>
                                    <td>{if active { "Active" } else { "Suspended" }}</td>
                                    <td>
                                        <button class="btn" disabled=busy.clone() on:click=toggle>
                                            {if active { "Suspend" } else { "Activate" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>

            <div class="admin-users__paging">
                <button class="btn" on:click=prev>"Previous"</button>
                <span>
                    {move || {
                        let s = state.get();
                        format!("Page {} of {}", s.page, s.total_pages())
                    }}
                </span>
                <button class="btn" on:click=next>"Next"</button>
            </div>
        </DashboardLayout>
    }
}
