//! Root application component with routing, context providers, and the
//! navigation gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{StaticSegment, path};

use crate::net::Client;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_users::AdminUsersPage, billing::BillingPage,
    cards::CardsPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    home::HomePage, kyc::KycPage, login::LoginPage, register::RegisterPage,
    reset_password::ResetPasswordPage, send::SendPage, settings::SettingsPage,
};
use crate::session::BrowserSession;

/// Authenticated API client over the session provided in context.
pub(crate) fn use_client() -> Client {
    Client::new(expect_context::<BrowserSession>())
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BrowserSession::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/levpay-web.css"/>
        <Title text="LevPay"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>

                <Route path=path!("/auth/login") view=LoginPage/>
                <Route path=path!("/auth/register") view=RegisterPage/>
                <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage/>
                <Route path=path!("/auth/reset-password") view=ResetPasswordPage/>

                <Route path=path!("/dashboard") view=DashboardPage/>
                <Route path=path!("/dashboard/send") view=SendPage/>
                <Route path=path!("/dashboard/billing") view=BillingPage/>
                <Route path=path!("/dashboard/cards") view=CardsPage/>
                <Route path=path!("/dashboard/kyc") view=KycPage/>
                <Route path=path!("/dashboard/settings") view=SettingsPage/>

                <Route path=path!("/admin/dashboard") view=AdminDashboardPage/>
                <Route path=path!("/admin/users") view=AdminUsersPage/>
            </Routes>
        </Router>
    }
}

/// Re-classifies every navigation against the access-token cookie and
/// redirects when the gate says so. Renders nothing.
#[component]
fn RouteGuard() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::{use_location, use_navigate};

        use crate::session::gate::{RouteDecision, classify};
        use crate::session::substrate::ACCESS_TOKEN_KEY;
        use crate::util::cookie;

        let location = use_location();
        let navigate = use_navigate();

        Effect::new(move || {
            let pathname = location.pathname.get();
            let has_token = cookie::has(ACCESS_TOKEN_KEY);
            if let RouteDecision::Redirect(target) = classify(&pathname, has_token) {
                navigate(&target, NavigateOptions::default());
            }
        });
    }
}
