//! Top bar: page title, notification bell, avatar, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::components::avatar::Avatar;
use crate::net::types::NotificationKind;
use crate::session::BrowserSession;
use crate::session::gate::LOGIN_PATH;
use crate::state::notifications::{self, NotificationsState};

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notif notif--info",
        NotificationKind::Success => "notif notif--success",
        NotificationKind::Warning => "notif notif--warning",
        NotificationKind::Error => "notif notif--error",
    }
}

#[component]
pub fn Header(#[prop(default = "LevPay")] title: &'static str) -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let client = use_client();
    let navigate = use_navigate();

    let notif = RwSignal::new(NotificationsState::default());

    // Initial bell state, fetched once on mount.
    Effect::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                notifications::fetch_notifications(&client, notif).await;
            });
        }
    });

    let on_logout = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Best effort; the local session clears either way.
                if let Err(e) = client.logout_remote().await {
                    leptos::logging::warn!("remote logout failed: {e}");
                }
                session.logout();
                navigate(LOGIN_PATH, NavigateOptions::default());
            });
        }
    };

    let user_badge = move || {
        session.signal().get().user.map(|u| {
            view! {
                <Avatar first_name=u.first_name last_name=u.last_name/>
            }
        })
    };

    let unread = move || notif.get().unread;

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <div class="app-header__spacer"></div>

            <button
                class="app-header__bell"
                on:click=move |_| notif.update(|n| n.open = !n.open)
            >
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="app-header__badge">{unread}</span>
                </Show>
            </button>

            <Show when=move || notif.get().open>
                <NotificationPanel notif=notif/>
            </Show>

            {user_badge}

            <button class="btn app-header__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}

/// Dropdown listing recent notifications; clicking one marks it read.
#[component]
fn NotificationPanel(notif: RwSignal<NotificationsState>) -> impl IntoView {
    let client = StoredValue::new_local(use_client());

    let items = move || notif.get().items;

    view! {
        <div class="notif-panel">
            <Show when=move || notif.get().items.is_empty()>
                <p class="notif-panel__empty">"Nothing yet."</p>
            </Show>
            <For each=items key=|n| n.id.clone() let:item>
                {
                    let client = client.clone();
                    let id = item.id.clone();
                    let read = item.read;
                    let on_click = move |_| {
                        if read {
                            return;
                        }
                        let client = client.get_value();
                        let id = id.clone();
                        leptos::task::spawn_local(async move {
                            notifications::mark_read(&client, notif, &id).await;
                        });
                    };
                    let classes = if read {
                        kind_class(item.kind).to_owned()
                    } else {
                        format!("{} notif--unread", kind_class(item.kind))
                    };
                    view! {
                        <div class=classes on:click=on_click>
                            <strong>{item.title.clone()}</strong>
                            <p>{item.message.clone()}</p>
                            <span class="notif__time">{item.created_at.clone()}</span>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
