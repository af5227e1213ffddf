//! Dashboard chrome: sidebar plus header around the page body.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardLayout(
    #[prop(default = "LevPay")] title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Header title=title/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
