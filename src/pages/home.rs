//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"LevPay"</h1>
            <p>"Send money, pay invoices, and manage your wallet."</p>
            <div class="home-page__actions">
                <A href="/auth/login">"Sign in"</A>
                <A href="/auth/register">"Create account"</A>
            </div>
        </div>
    }
}
