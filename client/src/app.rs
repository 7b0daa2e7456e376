//! Root app component: contexts, identity resolution, router, route table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::auth_guard::AuthGuard;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register_activity::RegisterActivityPage;
use crate::pages::register_credentials::RegisterCredentialsPage;
use crate::pages::register_goals::RegisterGoalsPage;
use crate::pages::register_names::RegisterNamesPage;
use crate::pages::register_profile::RegisterProfilePage;
use crate::pages::register_sport::RegisterSportPage;
use crate::state::auth::AuthState;
use crate::state::registration::RegistrationDraft;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let draft = RwSignal::new(RegistrationDraft::default());
    provide_context(auth);
    provide_context(draft);

    // First identity report: resolve the session cookie. Any failure
    // collapses to signed-out so loading always terminates.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_me().await.unwrap_or(None);
        auth.set(AuthState { user, loading: false });
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::signed_out());

    view! {
        <Title text="CoachFit"/>
        <Router>
            <AuthGuard>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/auth/change-password") view=ChangePasswordPage/>
                    <Route path=path!("/auth/register/names") view=RegisterNamesPage/>
                    <Route path=path!("/auth/register/goals") view=RegisterGoalsPage/>
                    <Route path=path!("/auth/register/profile") view=RegisterProfilePage/>
                    <Route path=path!("/auth/register/sport") view=RegisterSportPage/>
                    <Route path=path!("/auth/register/activity") view=RegisterActivityPage/>
                    <Route path=path!("/auth/register/credentials") view=RegisterCredentialsPage/>
                    <Route path=path!("/client/home") view=HomePage/>
                </Routes>
            </AuthGuard>
        </Router>
    }
}
