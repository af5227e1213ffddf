//! Left navigation rail. Admin entries only render for admin accounts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::session::BrowserSession;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let is_admin = move || session.signal().get().role() == Some(Role::Admin);

    view! {
        <nav class="sidebar">
            <A href="/dashboard">"Overview"</A>
            <A href="/dashboard/send">"Send money"</A>
            <A href="/dashboard/billing">"Billing"</A>
            <A href="/dashboard/cards">"Payment methods"</A>
            <A href="/dashboard/kyc">"Verification"</A>
            <A href="/dashboard/settings">"Settings"</A>

            <Show when=is_admin>
                <div class="sidebar__section">"Admin"</div>
                <A href="/admin/dashboard">"Stats"</A>
                <A href="/admin/users">"Users"</A>
            </Show>
        </nav>
    }
}
